use super::payload::{AdRequest, FormPart, FIELD_ATTACHED_FILES, FIELD_CHAT_INPUT, FIELD_PRODUCT, FIELD_PLATFORMS};

/// Вложенный файл: имя и содержимое
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    pub content: Vec<u8>,
}

impl AttachedFile {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Состояние формы генерации рекламы.
///
/// Живёт только пока открыта страница. Все изменения идут через методы ниже,
/// каждый из которых пишет диагностическую запись в лог.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdFormState {
    /// Выбранный продукт, пустая строка - ничего не выбрано
    pub selected_product: String,
    /// Выбранные площадки в порядке выбора, без дублей
    pub selected_platforms: Vec<String>,
    pub attached_files: Vec<AttachedFile>,
    pub chat_input: String,
    /// Итог последней отправки, пустая строка - отправки ещё не было
    pub status_message: String,
    /// Номер последнего выбора файлов; результаты старых чтений отбрасываются
    attach_generation: u64,
}

impl AdFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_product(&mut self, product: impl Into<String>) {
        self.selected_product = product.into();
        log::debug!("Product selected: {}", self.selected_product);
    }

    /// Отмечает или снимает площадку. Повторная отметка не создаёт дубль.
    pub fn toggle_platform(&mut self, platform: &str, checked: bool) {
        if checked {
            if !self.is_platform_selected(platform) {
                self.selected_platforms.push(platform.to_string());
            }
            log::debug!("Platform selected: {}", platform);
        } else {
            self.selected_platforms.retain(|p| p != platform);
            log::debug!("Platform deselected: {}", platform);
        }
    }

    pub fn is_platform_selected(&self, platform: &str) -> bool {
        self.selected_platforms.iter().any(|p| p == platform)
    }

    /// Заменяет список вложений целиком; пустой список очищает вложения
    pub fn attach_files(&mut self, files: Vec<AttachedFile>) {
        self.attached_files = files;
        log::debug!("Files attached: {:?}", self.attached_file_names());
    }

    /// Новый выбор в file picker: прежние вложения сбрасываются сразу,
    /// пока файлы читаются. Возвращает номер выбора для `finish_attach`.
    pub fn begin_attach(&mut self) -> u64 {
        self.attach_generation += 1;
        self.attached_files.clear();
        self.attach_generation
    }

    /// Применяет прочитанные файлы, только если после `generation` не было
    /// нового выбора. Возвращает `false`, если результат устарел.
    pub fn finish_attach(&mut self, generation: u64, files: Vec<AttachedFile>) -> bool {
        if generation != self.attach_generation {
            log::debug!(
                "Dropping stale attachment read #{} (current #{})",
                generation,
                self.attach_generation
            );
            return false;
        }
        self.attach_files(files);
        true
    }

    pub fn attached_file_names(&self) -> Vec<&str> {
        self.attached_files.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn edit_message(&mut self, text: impl Into<String>) {
        self.chat_input = text.into();
        log::debug!("Chat input changed: {}", self.chat_input);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Собирает multipart-запрос из текущего состояния.
    ///
    /// Продукт и сообщение попадают в запрос всегда, даже пустые;
    /// площадки и файлы - по одной части на элемент.
    pub fn to_request(&self) -> AdRequest {
        let mut parts = Vec::with_capacity(2 + self.selected_platforms.len() + self.attached_files.len());

        parts.push(FormPart::text(FIELD_PRODUCT, &self.selected_product));
        for platform in &self.selected_platforms {
            parts.push(FormPart::text(FIELD_PLATFORMS, platform));
        }
        parts.push(FormPart::text(FIELD_CHAT_INPUT, &self.chat_input));
        for file in &self.attached_files {
            parts.push(FormPart::File {
                name: FIELD_ATTACHED_FILES,
                file_name: file.name.clone(),
                content: file.content.clone(),
            });
        }

        AdRequest::new(parts)
    }
}
