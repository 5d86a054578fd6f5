// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Transient user notifications
//!
//! Front-end independent: the GUI turns these into toasts that remove
//! themselves after `NOTIFICATION_LIFETIME`, the CLI prints them once.

use std::fmt;
use std::time::Duration;

use crate::error::EditorError;
use crate::export::{ExportFormat, ExportOutput};

/// How long a toast stays on screen
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// CSS class applied to the toast widget
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Info, message: message.into() }
    }

    pub fn from_error(error: &EditorError) -> Self {
        Self::error(error.to_string())
    }

    /// Summary shown after a successful export
    pub fn exported(format: ExportFormat, output: &ExportOutput) -> Self {
        Self::success(format!(
            "Exported {} ({} categories, {} words)",
            format, output.categories, output.rows
        ))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidationError;

    #[test]
    fn test_error_notification_uses_error_message() {
        let error = EditorError::from(ValidationError::EmptySelection);

        let notification = Notification::from_error(&error);

        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, "Select at least one category to export");
    }

    #[test]
    fn test_export_summary() {
        let output = ExportOutput {
            bytes: Vec::new(),
            file_name: ExportFormat::Csv.file_name(),
            mime_type: ExportFormat::Csv.mime_type(),
            categories: 2,
            rows: 7,
        };

        let notification = Notification::exported(ExportFormat::Csv, &output);

        assert_eq!(notification.to_string(), "Exported CSV (2 categories, 7 words)");
        assert_eq!(notification.kind.css_class(), "toast-success");
    }
}
