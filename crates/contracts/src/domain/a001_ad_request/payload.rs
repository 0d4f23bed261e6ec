//! Multipart payload sent to the ad generation endpoint

pub const FIELD_PRODUCT: &str = "selectedProduct";
pub const FIELD_PLATFORMS: &str = "selectedPlatforms";
pub const FIELD_CHAT_INPUT: &str = "chatInput";
pub const FIELD_ATTACHED_FILES: &str = "attachedFiles";

/// Одна часть multipart-формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: &'static str,
        value: String,
    },
    File {
        name: &'static str,
        file_name: String,
        content: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: &'static str, value: impl Into<String>) -> Self {
        FormPart::Text {
            name,
            value: value.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Запрос на генерацию: части формы в порядке добавления
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdRequest {
    parts: Vec<FormPart>,
}

impl AdRequest {
    pub fn new(parts: Vec<FormPart>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Значения всех текстовых частей с данным именем
    pub fn text_values(&self, field: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                FormPart::Text { name, value } if *name == field => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Имена файлов во всех файловых частях с данным именем
    pub fn file_names(&self, field: &str) -> Vec<&str> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                FormPart::File { name, file_name, .. } if *name == field => Some(file_name.as_str()),
                _ => None,
            })
            .collect()
    }
}
