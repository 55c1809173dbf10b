//! 本地文件读取
//!
//! 将 `FileReader` 的回调包装为 Promise，再转成 Future。

use js_sys::{Function, Promise};
use levelspro_shared::draft::{DraftError, check_image_file};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

/// 读取图片文件为 data URL
///
/// 读取前检查 MIME 类型与大小，不合格的文件不会被读取。
pub async fn read_as_data_url(file: &File) -> Result<String, DraftError> {
    let name = file.name();
    check_image_file(&name, &file.type_(), file.size() as u64)?;

    let unreadable = |e: JsValue| {
        tracing::warn!(file = %name, error = ?e, "file read failed");
        DraftError::Unreadable(name.clone())
    };

    let reader = FileReader::new().map_err(unreadable)?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let source = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = source.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        reader.set_onload(Some(onload.unchecked_ref()));

        let onerror = Closure::once_into_js(move || {
            let _ = reject.call0(&JsValue::NULL);
        });
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(unreadable)?;

    let value = JsFuture::from(promise).await.map_err(unreadable)?;
    value
        .as_string()
        .ok_or_else(|| DraftError::Unreadable(name.clone()))
}
