//! Ad Request Form - Model (API functions)

use async_trait::async_trait;
use contracts::domain::a001_ad_request::{AdRequest, AttachedFile, FormPart};
use contracts::usecases::u001_generate_ads::{AdGateway, GatewayResponse, SubmitError};
use crate::shared::download::bytes_to_blob;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FileList, FormData, Request, RequestInit, RequestMode, Response};

/// AdGateway поверх `window.fetch`
pub struct FetchGateway;

#[async_trait(?Send)]
impl AdGateway for FetchGateway {
    async fn post_form(&self, url: &str, request: &AdRequest) -> Result<GatewayResponse, SubmitError> {
        let form_data = build_form_data(request)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form_data);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| SubmitError::Payload(format!("{e:?}")))?;

        let window = web_sys::window().ok_or_else(|| SubmitError::Network("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| SubmitError::Network(format!("{e:?}")))?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|e| SubmitError::Network(format!("{e:?}")))?;

        let buffer = JsFuture::from(
            resp.array_buffer()
                .map_err(|e| SubmitError::Network(format!("{e:?}")))?,
        )
        .await
        .map_err(|e| SubmitError::Network(format!("{e:?}")))?;
        let body = js_sys::Uint8Array::new(&buffer).to_vec();

        Ok(GatewayResponse {
            status: resp.status(),
            body,
        })
    }
}

fn build_form_data(request: &AdRequest) -> Result<FormData, SubmitError> {
    let payload_err = |e: wasm_bindgen::JsValue| SubmitError::Payload(format!("{e:?}"));

    let form_data = FormData::new().map_err(payload_err)?;
    for part in request.parts() {
        match part {
            FormPart::Text { name, value } => {
                form_data.append_with_str(name, value).map_err(payload_err)?;
            }
            FormPart::File {
                name,
                file_name,
                content,
            } => {
                let blob = bytes_to_blob(content).map_err(SubmitError::Payload)?;
                form_data
                    .append_with_blob_and_filename(name, &blob, file_name)
                    .map_err(payload_err)?;
            }
        }
    }
    Ok(form_data)
}

/// Читает все файлы из FileList по порядку. `None` - пустой список.
///
/// Файл, который не удалось прочитать, пропускается с записью в лог,
/// остальные всё равно попадают в результат.
pub async fn read_file_list(files: Option<FileList>) -> Vec<AttachedFile> {
    let Some(files) = files else {
        return Vec::new();
    };

    let mut attached = Vec::with_capacity(files.length() as usize);
    for i in 0..files.length() {
        let Some(file) = files.get(i) else {
            continue;
        };
        match JsFuture::from(file.array_buffer()).await {
            Ok(array_buffer) => {
                let content = js_sys::Uint8Array::new(&array_buffer).to_vec();
                attached.push(AttachedFile::new(file.name(), content));
            }
            Err(e) => log::error!("Failed to read {}: {:?}", file.name(), e),
        }
    }
    attached
}
