//! 新增商品表单模块
//!
//! `ProductDraft` 持有表单的全部数据，负责：
//! - 字段编辑（规格、图片列表的增删）
//! - 提交前校验
//! - 转换为 API 请求体

use crate::{Category, DEFAULT_WARRANTY, ProductPayload};
use thiserror::Error;


/// 单张图片的最大字节数 (5 MiB)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

// =========================================================
// 错误类型
// =========================================================

/// 表单校验错误，在任何网络请求之前返回
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Product name is required")]
    MissingName,
    #[error("Price is required")]
    MissingPrice,
    #[error("At least one image is required")]
    MissingImage,
    #[error("{0} is not an image file")]
    NotAnImage(String),
    #[error("{0} is larger than 5MB")]
    TooLarge(String),
    #[error("Could not read {0}")]
    Unreadable(String),
}

// =========================================================
// 图片条目
// =========================================================

/// 图片输入框中的一项
///
/// 本地上传与远程链接是两种不同的输入，不再共用一个字符串。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageEntry {
    #[default]
    Empty,
    /// 本地文件读取得到的 data URL
    Upload { data_url: String, file_name: String },
    /// 用户手动输入的地址
    Remote(String),
}

impl ImageEntry {
    /// 从输入框文本构造；空白文本视为空条目
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            ImageEntry::Empty
        } else if text.starts_with("data:") {
            ImageEntry::Upload {
                data_url: text.to_string(),
                file_name: String::new(),
            }
        } else {
            ImageEntry::Remote(text.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ImageEntry::Empty => true,
            ImageEntry::Upload { data_url, .. } => data_url.trim().is_empty(),
            ImageEntry::Remote(url) => url.trim().is_empty(),
        }
    }

    /// 可用于 `<img src>` 预览的地址
    pub fn preview(&self) -> Option<&str> {
        match self {
            ImageEntry::Empty => None,
            ImageEntry::Upload { data_url, .. } => Some(data_url.as_str()),
            ImageEntry::Remote(url) => Some(url.as_str()),
        }
        .filter(|s| !s.trim().is_empty())
    }

    /// 输入框中显示的文本
    pub fn display_text(&self) -> &str {
        match self {
            ImageEntry::Empty => "",
            ImageEntry::Upload { file_name, .. } if !file_name.is_empty() => file_name,
            ImageEntry::Upload { .. } => "Uploaded image",
            ImageEntry::Remote(url) => url,
        }
    }
}

/// 去掉 `data:<mime>;base64,` 前缀；不是 data URL 时原样返回
pub fn strip_data_url_prefix(data_url: &str) -> &str {
    if !data_url.starts_with("data:") {
        return data_url;
    }
    match data_url.split_once(',') {
        Some((_, base64)) => base64,
        None => data_url,
    }
}

/// 读取文件前的检查：必须是图片且不超过 5MB
pub fn check_image_file(file_name: &str, mime: &str, size: u64) -> Result<(), DraftError> {
    if !mime.starts_with("image/") {
        return Err(DraftError::NotAnImage(file_name.to_string()));
    }
    if size > MAX_IMAGE_BYTES {
        return Err(DraftError::TooLarge(file_name.to_string()));
    }
    Ok(())
}

// =========================================================
// 表单
// =========================================================

/// 表单上的一次编辑
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Name(String),
    Category(Category),
    Price(String),
    Warranty(String),
    Spec(usize, String),
    AddSpec,
    RemoveSpec(usize),
    Image(usize, ImageEntry),
    AddImage,
    RemoveImage(usize),
}

/// 新增商品表单
///
/// 规格与图片列表始终至少保留一个输入框。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: Category,
    pub price: String,
    pub warranty: String,
    pub specs: Vec<String>,
    pub images: Vec<ImageEntry>,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Laptops,
            price: String::new(),
            warranty: String::new(),
            specs: vec![String::new()],
            images: vec![ImageEntry::Empty],
        }
    }
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// 重置表单到初始状态
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 删除按钮只在多于一项时显示
    pub fn can_remove_spec(&self) -> bool {
        self.specs.len() > 1
    }

    pub fn can_remove_image(&self) -> bool {
        self.images.len() > 1
    }

    /// 填写了链接的条目数；这些图片不会被保存
    pub fn unsaved_links(&self) -> usize {
        self.images
            .iter()
            .filter(|e| matches!(e, ImageEntry::Remote(_)) && !e.is_empty())
            .count()
    }

    /// 应用一次编辑；越界的下标被忽略
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Name(name) => self.name = name,
            DraftEdit::Category(category) => self.category = category,
            DraftEdit::Price(price) => self.price = price,
            DraftEdit::Warranty(warranty) => self.warranty = warranty,
            DraftEdit::Spec(index, value) => {
                if let Some(spec) = self.specs.get_mut(index) {
                    *spec = value;
                }
            }
            DraftEdit::AddSpec => self.specs.push(String::new()),
            DraftEdit::RemoveSpec(index) => {
                if self.can_remove_spec() && index < self.specs.len() {
                    self.specs.remove(index);
                }
            }
            DraftEdit::Image(index, entry) => {
                if let Some(image) = self.images.get_mut(index) {
                    *image = entry;
                }
            }
            DraftEdit::AddImage => self.images.push(ImageEntry::Empty),
            DraftEdit::RemoveImage(index) => {
                if self.can_remove_image() && index < self.images.len() {
                    self.images.remove(index);
                }
            }
        }
    }

    /// 校验并转换为请求体
    ///
    /// 规格去掉首尾空白后丢弃空项；保修为空时使用默认值。
    pub fn validate(&self) -> Result<ProductPayload, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::MissingName);
        }
        let price = self.price.trim();
        if price.is_empty() {
            return Err(DraftError::MissingPrice);
        }

        // 只有上传的文件会发送，链接条目不进入请求体
        let images_data: Vec<String> = self
            .images
            .iter()
            .filter(|e| !e.is_empty())
            .filter_map(|entry| match entry {
                ImageEntry::Upload { data_url, .. } => {
                    Some(strip_data_url_prefix(data_url.trim()).to_string())
                }
                ImageEntry::Remote(_) | ImageEntry::Empty => None,
            })
            .collect();
        if images_data.is_empty() {
            return Err(DraftError::MissingImage);
        }

        let specs = self
            .specs
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let warranty = match self.warranty.trim() {
            "" => DEFAULT_WARRANTY.to_string(),
            w => w.to_string(),
        };

        Ok(ProductPayload {
            name: name.to_string(),
            category: self.category,
            price: price.to_string(),
            specs,
            warranty,
            images_data,
        })
    }
}
