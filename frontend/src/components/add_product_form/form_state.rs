//! 表单状态管理模块
//!
//! 表单数据由控制器中的 `ProductDraft` 持有，`FormState` 只是一个句柄，负责：
//! - 读取字段（建立响应式依赖）
//! - 将输入转换为 `DraftEdit` 发送给控制器

use crate::web::controller::ControllerService;
use leptos::prelude::WithUntracked;
use levelspro_shared::draft::{DraftEdit, DraftError, ImageEntry, ProductDraft};
use levelspro_shared::view::Action;

/// 表单状态句柄
///
/// 实现了 `Copy`，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    ctrl: ControllerService,
}

impl FormState {
    pub fn new(ctrl: ControllerService) -> Self {
        Self { ctrl }
    }

    /// 读取表单的一部分
    pub fn read<R>(&self, f: impl FnOnce(&ProductDraft) -> R) -> R {
        self.ctrl.with(|s| f(&s.draft))
    }

    pub fn edit(&self, edit: DraftEdit) {
        self.ctrl.dispatch(Action::EditDraft(edit));
    }

    /// 当前表单的代数（不建立依赖），在开始读取文件时记录
    pub fn generation(&self) -> u64 {
        self.ctrl.state().with_untracked(|s| s.draft_generation)
    }

    /// 文件读取完成；表单已被丢弃时结果会被忽略
    pub fn image_read(&self, draft: u64, index: usize, result: Result<ImageEntry, DraftError>) {
        self.ctrl.dispatch(Action::ImageRead {
            draft,
            index,
            result,
        });
    }

    pub fn submit(&self) {
        self.ctrl.dispatch(Action::SubmitDraft);
    }

    pub fn spec(&self, index: usize) -> String {
        self.read(|d| d.specs.get(index).cloned().unwrap_or_default())
    }

    pub fn image(&self, index: usize) -> ImageEntry {
        self.read(|d| d.images.get(index).cloned().unwrap_or_default())
    }

    pub fn error(&self) -> Option<DraftError> {
        self.ctrl.with(|s| s.draft_error.clone())
    }

    pub fn is_submitting(&self) -> bool {
        self.ctrl.with(|s| s.submitting)
    }
}
