//! 键值存储抽象
//!
//! 浏览器中由 LocalStorage 实现；没有持久化存储时（例如预渲染）
//! 实现应返回安全的默认值，而不是报错。

use std::cell::RefCell;
use std::collections::HashMap;

pub trait KeyValueStore {
    /// 键不存在或存储不可用时返回 `None`
    fn get(&self, key: &str) -> Option<String>;

    /// 返回是否写入成功
    fn set(&self, key: &str, value: &str) -> bool;

    /// 返回是否删除成功
    fn delete(&self, key: &str) -> bool;
}

/// 内存存储
///
/// 存储不可用时的替代品，也用于测试。
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.borrow_mut().remove(key);
        true
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        (**self).delete(key)
    }
}
