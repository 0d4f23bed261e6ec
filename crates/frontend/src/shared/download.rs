//! Отдача полученного файла пользователю через скрытую ссылку

use contracts::usecases::u001_generate_ads::{ArtifactSink, DownloadError, GeneratedArtifact};
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

/// ArtifactSink для браузера: Blob + object URL + клик по `<a download>`
pub struct BlobDownload;

impl ArtifactSink for BlobDownload {
    fn offer(&self, artifact: &GeneratedArtifact, filename: &str) -> Result<(), DownloadError> {
        let blob = bytes_to_blob(&artifact.bytes).map_err(DownloadError)?;
        download_blob(&blob, filename).map_err(DownloadError)
    }
}

/// Создает Blob из байтов без указания типа (ответ сервера не проверяется)
pub fn bytes_to_blob(bytes: &[u8]) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    Blob::new_with_u8_array_sequence(&array).map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Выполняет `body` с URL и освобождает его при любом исходе `body`
fn with_scoped_url<T, E>(
    url: &str,
    body: impl FnOnce(&str) -> Result<T, E>,
    release: impl FnOnce(&str),
) -> Result<T, E> {
    let result = body(url);
    release(url);
    result
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let mut revoke_err = None;
    with_scoped_url(
        &url,
        |url| click_download_link(&document, url, filename),
        |url| {
            if let Err(e) = Url::revoke_object_url(url) {
                revoke_err = Some(format!("Failed to revoke URL: {:?}", e));
            }
        },
    )?;
    if let Some(e) = revoke_err {
        return Err(e);
    }

    log::debug!("Download offered: {}", filename);
    Ok(())
}

/// Скрытая ссылка `<a download>`: вставить, кликнуть, убрать
fn click_download_link(document: &web_sys::Document, url: &str, filename: &str) -> Result<(), String> {
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();
    anchor.remove();
    Ok(())
}
