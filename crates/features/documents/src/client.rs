use crate::error::DocumentError;
use serde::{Deserialize, Serialize};

/// A client record as submitted by the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    #[serde(default)]
    pub name: String,
    /// CPF or CNPJ.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
}

/// Checks the fields a client cannot be saved without.
///
/// Only the name is mandatory here; the document, e-mail and CEP are checked by
/// their own predicates where the form needs them.
///
/// # Errors
/// Returns [`DocumentError::Validation`] with `"name is required"` when the name is
/// empty or whitespace only.
pub fn validate_client(client: &ClientDraft) -> Result<(), DocumentError> {
    if client.name.trim().is_empty() {
        return Err(DocumentError::Validation {
            message: "name is required".into(),
            context: Some("client".into()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> ClientDraft {
        ClientDraft { name: name.to_owned(), ..ClientDraft::default() }
    }

    #[test]
    fn named_client_passes() {
        assert!(validate_client(&draft("ACME LTDA")).is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        for name in ["", "   ", "\t\n"] {
            let err = validate_client(&draft(name)).unwrap_err();
            assert!(matches!(&err, DocumentError::Validation { message, .. } if message == "name is required"));
        }
    }

    #[test]
    fn other_fields_are_not_checked() {
        let client = ClientDraft {
            name: "Maria".into(),
            document: Some("000".into()),
            email: Some("nope".into()),
            cep: Some("1".into()),
        };
        assert!(validate_client(&client).is_ok());
    }

    #[test]
    fn deserializes_camel_case_with_missing_fields() {
        let client: ClientDraft = serde_json::from_str(r#"{"name":"Joao","cep":"12345-678"}"#).unwrap();
        assert_eq!(client.name, "Joao");
        assert_eq!(client.cep.as_deref(), Some("12345-678"));
        assert!(client.document.is_none());
    }
}
