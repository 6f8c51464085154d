//! Display values derived from the state, kept apart from the components so
//! the formatting rules can be tested without rendering.

use payloads::EventDetail;

use crate::utils::time::format_event_date;

/// Text for each line of the details pane. Missing or empty optional fields
/// become empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub heading: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl From<&EventDetail> for DetailView {
    fn from(detail: &EventDetail) -> Self {
        Self {
            heading: format!("{} #{}", detail.name, detail.id),
            date: present(&detail.date)
                .map(format_event_date)
                .unwrap_or_default(),
            location: present(&detail.location).unwrap_or_default().to_string(),
            description: present(&detail.description)
                .unwrap_or_default()
                .to_string(),
        }
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
