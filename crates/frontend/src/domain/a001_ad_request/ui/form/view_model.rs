//! Ad Request Form - View Model

use super::model::{read_file_list, FetchGateway};
use crate::shared::download::BlobDownload;
use contracts::domain::a001_ad_request::AdFormState;
use contracts::shared::config::{load_config, AppConfig};
use contracts::usecases::u001_generate_ads::submit;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AdFormVm {
    pub form: RwSignal<AdFormState>,
    /// Встроенная конфигурация или текст ошибки её разбора
    pub config: StoredValue<Result<AppConfig, String>>,
}

impl AdFormVm {
    pub fn new() -> Self {
        let config = load_config().map_err(|e| {
            log::error!("{}", e);
            e.to_string()
        });

        Self {
            form: RwSignal::new(AdFormState::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn select_product(&self, product: String) {
        self.form.update(|f| f.select_product(product));
    }

    pub fn toggle_platform(&self, platform: &str, checked: bool) {
        self.form.update(|f| f.toggle_platform(platform, checked));
    }

    pub fn edit_message(&self, text: String) {
        self.form.update(|f| f.edit_message(text));
    }

    /// Прежние вложения сбрасываются сразу; прочитанные файлы применяются,
    /// только если за время чтения не было нового выбора
    pub fn attach_files(&self, files: Option<web_sys::FileList>) {
        let vm = *self;
        let generation = self.form.try_update(|f| f.begin_attach()).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let attached = read_file_list(files).await;
            vm.form.update(|f| {
                f.finish_attach(generation, attached);
            });
        });
    }

    /// Кнопка "Generate Ads". Повторное нажатие не блокируется.
    pub fn submit(&self) {
        let vm = *self;
        let request = self.form.with_untracked(|f| f.to_request());
        let config = match self.config.get_value() {
            Ok(config) => config,
            Err(e) => {
                self.form.update(|f| f.set_status(format!("Error generating ad: {}", e)));
                return;
            }
        };

        leptos::task::spawn_local(async move {
            let outcome = submit(&FetchGateway, &BlobDownload, &config, &request).await;
            vm.form.update(|f| f.record_outcome(&outcome, &config.download));
        });
    }
}

impl Default for AdFormVm {
    fn default() -> Self {
        Self::new()
    }
}
