//! The case-preserve denylist and the per-field classification built on it.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::LazyLock;
use strum_macros::{AsRefStr, Display, EnumString};

/// Lowercase fragments that keep a field's case when found in its name or id.
pub const PRESERVE_FRAGMENTS: &[&str] = &[
    "email",
    "password",
    "senha",
    "telefone",
    "cpf",
    "cnpj",
    "cep",
    "limitecredito",
    "salario",
    "valor",
    "preco",
    "quantidade",
    "codigotelefonico",
    "codigo",
];

static BUILTIN: LazyLock<CasePolicy> = LazyLock::new(CasePolicy::default);

/// Declared input type of a form field. Unknown types parse as [`FieldKind::Other`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase", from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FieldKind {
    #[default]
    Text,
    Search,
    Textarea,
    Email,
    Number,
    Tel,
    Password,
    Other,
}

impl From<String> for FieldKind {
    fn from(kind: String) -> Self {
        Self::parse(&kind)
    }
}

impl FieldKind {
    /// Lenient parse: anything unrecognized becomes [`FieldKind::Other`].
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        kind.trim().parse().unwrap_or(Self::Other)
    }

    /// Types whose value is never upper-cased, whatever the field is called.
    #[must_use]
    pub const fn preserves_case(self) -> bool {
        matches!(self, Self::Email | Self::Number | Self::Tel)
    }

    /// Plain text inputs the fallback sweep looks at.
    #[must_use]
    pub const fn is_free_text(self) -> bool {
        matches!(self, Self::Text | Self::Search | Self::Textarea)
    }
}

/// Canonical view of a field, built by every call shape before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor<'a> {
    pub name: &'a str,
    pub id: Option<&'a str>,
    pub kind: FieldKind,
}

impl<'a> FieldDescriptor<'a> {
    #[must_use]
    pub const fn named(name: &'a str) -> Self {
        Self { name, id: None, kind: FieldKind::Text }
    }

    #[must_use]
    pub const fn with_id(mut self, id: Option<&'a str>) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldClass {
    Preserve,
    Transform,
}

impl FieldClass {
    #[must_use]
    pub const fn is_preserved(self) -> bool {
        matches!(self, Self::Preserve)
    }
}

/// Decides whether a field's value is upper-cased.
///
/// A field is preserved when its name or id contains a denylisted fragment
/// (case-insensitive) or its kind is `email`, `number` or `tel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CasePolicy {
    fragments: Vec<Cow<'static, str>>,
}

impl Default for CasePolicy {
    fn default() -> Self {
        Self { fragments: PRESERVE_FRAGMENTS.iter().copied().map(Cow::Borrowed).collect() }
    }
}

impl CasePolicy {
    /// Shared instance holding only the built-in fragments.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Appends fragments to the denylist. Blank entries are skipped.
    #[must_use]
    pub fn with_extra_fragments<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for fragment in extra {
            let fragment = fragment.as_ref().trim().to_lowercase();
            if !fragment.is_empty() && !self.fragments.iter().any(|f| *f == fragment) {
                self.fragments.push(Cow::Owned(fragment));
            }
        }
        self
    }

    pub fn fragments(&self) -> impl Iterator<Item = &str> + '_ {
        self.fragments.iter().map(|fragment| &**fragment)
    }

    #[must_use]
    pub fn classify(&self, field: &FieldDescriptor<'_>) -> FieldClass {
        if field.kind.preserves_case()
            || self.is_denylisted(field.name)
            || field.id.is_some_and(|id| self.is_denylisted(id))
        {
            FieldClass::Preserve
        } else {
            FieldClass::Transform
        }
    }

    /// Returns the value to store: borrowed when nothing changes.
    #[must_use]
    pub fn transform<'v>(&self, field: &FieldDescriptor<'_>, value: &'v str) -> Cow<'v, str> {
        if value.is_empty() || self.classify(field).is_preserved() {
            return Cow::Borrowed(value);
        }

        let upper = value.to_uppercase();
        if upper == value { Cow::Borrowed(value) } else { Cow::Owned(upper) }
    }

    fn is_denylisted(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        let key = key.to_lowercase();
        self.fragments.iter().any(|fragment| key.contains(&**fragment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> FieldClass {
        CasePolicy::builtin().classify(&FieldDescriptor::named(name))
    }

    #[test]
    fn denylisted_names_are_preserved() {
        for name in [
            "email",
            "emailContato",
            "senha",
            "password_confirm",
            "telefone",
            "cpf",
            "cnpjFornecedor",
            "cep",
            "limiteCredito",
            "salario",
            "valorTotal",
            "precoVenda",
            "quantidade",
            "codigoTelefonico",
            "codigoProduto",
        ] {
            assert_eq!(class(name), FieldClass::Preserve, "{name}");
        }
    }

    #[test]
    fn other_names_transform() {
        for name in ["nome", "razaoSocial", "endereco", "cidade", "observacao", ""] {
            assert_eq!(class(name), FieldClass::Transform, "{name}");
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(class("EMAIL"), FieldClass::Preserve);
        assert_eq!(class("Cliente_CPF"), FieldClass::Preserve);
    }

    #[test]
    fn id_is_checked_when_name_is_neutral() {
        let field = FieldDescriptor::named("campo1").with_id(Some("inputEmail"));
        assert_eq!(CasePolicy::builtin().classify(&field), FieldClass::Preserve);
    }

    #[test]
    fn kind_alone_preserves() {
        let policy = CasePolicy::builtin();
        for kind in [FieldKind::Email, FieldKind::Number, FieldKind::Tel] {
            let field = FieldDescriptor::named("nome").with_kind(kind);
            assert_eq!(policy.classify(&field), FieldClass::Preserve, "{kind}");
        }
        let field = FieldDescriptor::named("nome").with_kind(FieldKind::Password);
        assert_eq!(policy.classify(&field), FieldClass::Transform);
    }

    #[test]
    fn transform_upper_cases_or_borrows() {
        let policy = CasePolicy::builtin();
        let nome = FieldDescriptor::named("nome");
        assert_eq!(policy.transform(&nome, "João da Silva"), "JOÃO DA SILVA");
        assert!(matches!(policy.transform(&nome, "JOÃO"), Cow::Borrowed("JOÃO")));
        assert!(matches!(policy.transform(&nome, ""), Cow::Borrowed("")));

        let email = FieldDescriptor::named("email");
        assert!(matches!(policy.transform(&email, "Ana@Mail.com"), Cow::Borrowed("Ana@Mail.com")));
    }

    #[test]
    fn extra_fragments_extend_the_denylist() {
        let policy = CasePolicy::default().with_extra_fragments(["  Placa ", "", "cpf"]);
        assert_eq!(policy.classify(&FieldDescriptor::named("placaVeiculo")), FieldClass::Preserve);
        assert_eq!(policy.fragments().filter(|f| *f == "cpf").count(), 1);
        assert_eq!(policy.fragments().count(), PRESERVE_FRAGMENTS.len() + 1);
    }

    #[test]
    fn field_kind_parses_leniently() {
        assert_eq!(FieldKind::parse("TEL"), FieldKind::Tel);
        assert_eq!(FieldKind::parse(" textarea "), FieldKind::Textarea);
        assert_eq!(FieldKind::parse("date"), FieldKind::Other);
        assert_eq!(FieldKind::Search.as_ref(), "search");
    }

    #[test]
    fn field_kind_deserializes_like_parse() {
        let kinds: Vec<FieldKind> =
            serde_json::from_str(r#"["EMAIL", "Tel", " Number ", "textarea", "date"]"#).unwrap();
        assert_eq!(
            kinds,
            [FieldKind::Email, FieldKind::Tel, FieldKind::Number, FieldKind::Textarea, FieldKind::Other]
        );
        assert_eq!(serde_json::to_string(&FieldKind::Tel).unwrap(), r#""tel""#);
    }
}
