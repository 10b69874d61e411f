use crate::error::ValidationError;
use crate::media::MediaFile;
use app_state::MediaSettings;

/// Form input for a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: String,
    pub tags: String,
    pub category: String,
    pub description: String,
}

impl RecordDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name)?;
        require_category(&self.category)
    }
}

/// Field overlay for an existing record. `None` leaves the stored value as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordChanges {
    pub name: Option<String>,
    pub tags: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl RecordChanges {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require_name(name)?;
        }
        if let Some(category) = &self.category {
            require_category(category)?;
        }
        Ok(())
    }
}

fn require_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

fn require_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::MissingCategory);
    }
    Ok(())
}

/// What the media service accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            allowed_content_types: ["image/jpeg", "image/jpg", "image/png", "image/webp", "image/gif"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl From<&MediaSettings> for UploadPolicy {
    fn from(settings: &MediaSettings) -> Self {
        Self {
            max_bytes: settings.max_upload_bytes,
            allowed_content_types: settings.allowed_content_types.clone(),
        }
    }
}

impl UploadPolicy {
    pub fn check(&self, file: Option<&MediaFile>) -> Result<(), ValidationError> {
        let Some(file) = file else {
            return Err(ValidationError::MissingFile);
        };
        if !self
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&file.content_type))
        {
            return Err(ValidationError::UnsupportedContentType(
                file.content_type.clone(),
            ));
        }
        if file.size() > self.max_bytes {
            return Err(ValidationError::FileTooLarge {
                size: file.size(),
                max: self.max_bytes,
            });
        }
        Ok(())
    }
}
