use crate::api::DownloadedFile;

/// Name used when the server did not send one, with a sane extension.
pub fn fallback_file_name(file: &DownloadedFile, stem: &str) -> String {
    if !file.file_name.trim().is_empty() {
        return file.file_name.clone();
    }
    let extension = match file.content_type.as_deref() {
        Some(ct) if ct.starts_with("application/pdf") => "pdf",
        Some(ct) if ct.starts_with("image/png") => "png",
        Some(ct) if ct.starts_with("image/jpeg") => "jpg",
        Some(ct) if ct.starts_with("text/plain") => "txt",
        _ => "bin",
    };
    format!("{}.{}", stem, extension)
}

#[cfg(target_arch = "wasm32")]
pub fn save_file(file: &DownloadedFile) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    if let Some(content_type) = &file.content_type {
        options.set_type(content_type);
    }
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let a = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(&url);
    a.set_download(&fallback_file_name(file, "document"));
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(file: &DownloadedFile) -> Result<(), String> {
    log::info!(
        "download of {} ({} bytes) skipped outside the browser",
        fallback_file_name(file, "document"),
        file.bytes.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content_type: Option<&str>) -> DownloadedFile {
        DownloadedFile {
            file_name: name.into(),
            content_type: content_type.map(str::to_string),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn keeps_server_file_name() {
        assert_eq!(fallback_file_name(&file("cv.pdf", None), "doc"), "cv.pdf");
    }

    #[test]
    fn derives_extension_from_content_type() {
        assert_eq!(
            fallback_file_name(&file("", Some("application/pdf")), "doc"),
            "doc.pdf"
        );
        assert_eq!(fallback_file_name(&file(" ", None), "doc"), "doc.bin");
    }
}
