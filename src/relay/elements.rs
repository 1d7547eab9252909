use eframe::egui;
use thiserror::Error;

use crate::config::ElementIds;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupFault {
    #[error("required element `{0}` has no identifier")]
    Missing(&'static str),
    #[error("elements `{0}` and `{1}` share the identifier `{2}`")]
    Duplicate(&'static str, &'static str, String),
}

/// Resolved handles of the form, the text input and the message container.
#[derive(Debug, Clone, Copy)]
pub struct ChatElements {
    pub form: egui::Id,
    pub input: egui::Id,
    pub container: egui::Id,
}

impl ChatElements {
    pub fn resolve(ids: &ElementIds) -> Result<Self, SetupFault> {
        let named = [
            ("form", ids.form.trim()),
            ("input", ids.input.trim()),
            ("container", ids.container.trim()),
        ];

        for (role, id) in named {
            if id.is_empty() {
                return Err(SetupFault::Missing(role));
            }
        }
        for (i, &(role, id)) in named.iter().enumerate() {
            if let Some(&(clash, _)) = named[i + 1..].iter().find(|&&(_, other)| other == id) {
                return Err(SetupFault::Duplicate(role, clash, id.to_string()));
            }
        }

        Ok(Self {
            form: egui::Id::new(named[0].1),
            input: egui::Id::new(named[1].1),
            container: egui::Id::new(named[2].1),
        })
    }
}
