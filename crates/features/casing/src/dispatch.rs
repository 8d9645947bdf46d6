//! The two call shapes a form uses to reach the policy.
//!
//! Forms either hand over a `(name, value)` pair and store the result themselves, or
//! forward their change event together with a setter continuation. Both build a
//! [`FieldDescriptor`] and go through [`CasePolicy::classify`].

use crate::policy::{CasePolicy, FieldDescriptor, FieldKind};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The element a change event was raised on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTarget {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub value: String,
}

/// A change event as emitted by a controlled input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub target: EventTarget,
}

impl ChangeEvent {
    #[must_use]
    pub fn new(target: EventTarget) -> Self {
        Self { target }
    }

    #[must_use]
    pub fn descriptor(&self) -> FieldDescriptor<'_> {
        let target = &self.target;
        FieldDescriptor::named(&target.name).with_id(target.id.as_deref()).with_kind(target.kind)
    }
}

/// Setter continuation receiving `(field name, normalized value)`.
pub type Setter<'a> = Box<dyn FnOnce(&str, String) + 'a>;

/// Argument of [`transform_field_value`], one variant per call shape.
pub enum FieldUpdate<'a> {
    /// The caller stores the returned value.
    Direct { name: &'a str, value: &'a str },
    /// The normalized value is handed to `setter`; nothing is returned.
    Event { event: &'a ChangeEvent, setter: Setter<'a> },
}

impl fmt::Debug for FieldUpdate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Direct { name, value } => {
                f.debug_struct("Direct").field("name", name).field("value", value).finish()
            },
            Self::Event { event, .. } => {
                f.debug_struct("Event").field("event", event).finish_non_exhaustive()
            },
        }
    }
}

impl CasePolicy {
    /// Single entry point for both call shapes.
    ///
    /// Returns `Some(value)` for [`FieldUpdate::Direct`] and `None` once the setter
    /// of a [`FieldUpdate::Event`] has been invoked.
    pub fn dispatch(&self, update: FieldUpdate<'_>) -> Option<String> {
        match update {
            FieldUpdate::Direct { name, value } => Some(self.normalize_value(name, value)),
            FieldUpdate::Event { event, setter } => {
                self.normalize_event(event, setter);
                None
            },
        }
    }

    #[must_use]
    pub fn normalize_value(&self, name: &str, value: &str) -> String {
        self.transform(&FieldDescriptor::named(name), value).into_owned()
    }

    pub fn normalize_event<F>(&self, event: &ChangeEvent, setter: F)
    where
        F: FnOnce(&str, String),
    {
        let value = self.transform(&event.descriptor(), &event.target.value).into_owned();
        setter(&event.target.name, value);
    }

    /// Normalizes one JSON value of a submitted form. Non-string values pass through.
    #[must_use]
    pub fn normalize_json(&self, name: &str, value: Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.normalize_value(name, &text)),
            other => other,
        }
    }

    /// Normalizes every top-level entry of a form keyed by field name.
    #[must_use]
    pub fn normalize_form(&self, form: Map<String, Value>) -> Map<String, Value> {
        form.into_iter()
            .map(|(name, value)| {
                let value = self.normalize_json(&name, value);
                (name, value)
            })
            .collect()
    }
}

/// [`CasePolicy::dispatch`] with the built-in denylist.
pub fn transform_field_value(update: FieldUpdate<'_>) -> Option<String> {
    CasePolicy::builtin().dispatch(update)
}

/// Direct shape with the built-in denylist.
#[must_use]
pub fn normalize_value(name: &str, value: &str) -> String {
    CasePolicy::builtin().normalize_value(name, value)
}

/// Event/continuation shape with the built-in denylist.
pub fn normalize_event<F>(event: &ChangeEvent, setter: F)
where
    F: FnOnce(&str, String),
{
    CasePolicy::builtin().normalize_event(event, setter);
}

/// Form-wide normalization with the built-in denylist.
#[must_use]
pub fn normalize_form(form: Map<String, Value>) -> Map<String, Value> {
    CasePolicy::builtin().normalize_form(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(name: &str, kind: FieldKind, value: &str) -> ChangeEvent {
        ChangeEvent::new(EventTarget {
            name: name.to_owned(),
            id: None,
            kind,
            value: value.to_owned(),
        })
    }

    #[test]
    fn direct_shape_returns_the_value() {
        let out = transform_field_value(FieldUpdate::Direct { name: "nome", value: "maria" });
        assert_eq!(out.as_deref(), Some("MARIA"));

        let out = transform_field_value(FieldUpdate::Direct { name: "email", value: "Maria@X.com" });
        assert_eq!(out.as_deref(), Some("Maria@X.com"));
    }

    #[test]
    fn event_shape_calls_the_setter_once() {
        let ev = event("razaoSocial", FieldKind::Text, "acme ltda");
        let mut calls = Vec::new();

        let out = transform_field_value(FieldUpdate::Event {
            event: &ev,
            setter: Box::new(|name, value| calls.push((name.to_owned(), value))),
        });

        assert!(out.is_none());
        assert_eq!(calls, vec![("razaoSocial".to_owned(), "ACME LTDA".to_owned())]);
    }

    #[test]
    fn event_kind_and_id_are_honored() {
        let mut stored = String::new();
        normalize_event(&event("contato", FieldKind::Tel, "ramal a"), |_, v| stored = v);
        assert_eq!(stored, "ramal a");

        let mut ev = event("campo", FieldKind::Text, "abc");
        ev.target.id = Some("codigoInterno".to_owned());
        normalize_event(&ev, |_, v| stored = v);
        assert_eq!(stored, "abc");
    }

    #[test]
    fn event_deserializes_from_target_json() {
        let ev: ChangeEvent =
            serde_json::from_value(json!({ "target": { "name": "cidade", "type": "search", "value": "recife" } }))
                .unwrap();
        assert_eq!(ev.target.kind, FieldKind::Search);

        let mut stored = String::new();
        normalize_event(&ev, |_, v| stored = v);
        assert_eq!(stored, "RECIFE");
    }

    #[test]
    fn event_kind_is_case_insensitive() {
        for (kind, value) in [("EMAIL", "Ana@Mail.com"), ("Tel", "+55 (81) 9999-abc")] {
            let ev: ChangeEvent =
                serde_json::from_value(json!({ "target": { "name": "contato", "type": kind, "value": value } }))
                    .unwrap();
            assert!(ev.target.kind.preserves_case(), "{kind}");

            let mut stored = String::new();
            normalize_event(&ev, |_, v| stored = v);
            assert_eq!(stored, value, "{kind}");
        }
    }

    #[test]
    fn form_keeps_non_strings_and_denylisted_fields() {
        let form = json!({
            "nome": "ana",
            "email": "Ana@Mail.com",
            "quantidade": 3,
            "ativo": true,
            "observacao": null,
            "tags": ["a", "b"],
        });
        let Value::Object(form) = form else { unreachable!() };

        let out = normalize_form(form);
        assert_eq!(
            Value::Object(out),
            json!({
                "nome": "ANA",
                "email": "Ana@Mail.com",
                "quantidade": 3,
                "ativo": true,
                "observacao": null,
                "tags": ["a", "b"],
            })
        );
    }

    #[test]
    fn update_debug_hides_the_setter() {
        let ev = event("nome", FieldKind::Text, "x");
        let update = FieldUpdate::Event { event: &ev, setter: Box::new(|_, _| {}) };
        assert!(format!("{update:?}").starts_with("Event"));
    }
}
