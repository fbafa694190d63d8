use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::utils::AppError;

/// Registro de usuário mantido pelo `UserStore`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Corpo do `POST /user`. Campos ausentes viram string vazia e são
/// rejeitados por `into_user`.
#[derive(Debug, Default, utoipa::ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

// Só aceita objeto JSON. Chaves casam sem diferenciar maiúsculas, a última
// ocorrência vence e `null` mantém o valor anterior.
impl<'de> Deserialize<'de> for CreateUserRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CreateUserRequestVisitor)
    }
}

struct CreateUserRequestVisitor;

impl<'de> Visitor<'de> for CreateUserRequestVisitor {
    type Value = CreateUserRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with name and email")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = CreateUserRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            let slot = match key.to_lowercase().as_str() {
                "name" => &mut request.name,
                "email" => &mut request.email,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                    continue;
                }
            };

            if let Some(value) = map.next_value::<Option<String>>()? {
                *slot = value;
            }
        }

        Ok(request)
    }

    fn visit_seq<A>(self, _seq: A) -> Result<Self::Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        Err(de::Error::invalid_type(de::Unexpected::Seq, &self))
    }
}

impl CreateUserRequest {
    /// Decodifica o primeiro valor JSON do corpo.
    ///
    /// `null` decodifica como corpo vazio (falha depois na validação);
    /// corpo vazio ou JSON inválido é `MalformedInput`.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let mut stream = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<CreateUserRequest>>();

        match stream.next() {
            Some(Ok(request)) => Ok(request.unwrap_or_default()),
            Some(Err(_)) | None => Err(AppError::MalformedInput),
        }
    }

    pub fn into_user(self) -> Result<User, AppError> {
        if self.name.is_empty() {
            return Err(AppError::ValidationError("user name required".to_string()));
        }
        if self.email.is_empty() {
            return Err(AppError::ValidationError("email required".to_string()));
        }

        Ok(User {
            name: self.name,
            email: self.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_rejects_empty_and_garbage() {
        assert!(matches!(CreateUserRequest::from_body(b""), Err(AppError::MalformedInput)));
        assert!(matches!(CreateUserRequest::from_body(b"   "), Err(AppError::MalformedInput)));
        assert!(matches!(CreateUserRequest::from_body(b"{name:"), Err(AppError::MalformedInput)));
        assert!(matches!(
            CreateUserRequest::from_body(br#"{"name": 42, "email": "a@b.com"}"#),
            Err(AppError::MalformedInput)
        ));
    }

    #[test]
    fn test_from_body_ignores_unknown_fields_and_trailing_data() {
        let request = CreateUserRequest::from_body(
            br#"{"name":"Ann","email":"ann@x.com","age":30} trailing"#,
        )
        .unwrap();

        assert_eq!(request.name, "Ann");
        assert_eq!(request.email, "ann@x.com");
    }

    #[test]
    fn test_from_body_rejects_non_objects() {
        for body in [&br#"["Ann","arr@x.com"]"#[..], b"42", br#""Ann""#, b"true"] {
            assert!(
                matches!(CreateUserRequest::from_body(body), Err(AppError::MalformedInput)),
                "body {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_field_names_match_case_insensitively() {
        let request =
            CreateUserRequest::from_body(br#"{"Name":"Ann","EMAIL":"case@x.com"}"#).unwrap();

        assert_eq!(request.name, "Ann");
        assert_eq!(request.email, "case@x.com");
    }

    #[test]
    fn test_repeated_keys_keep_last_value() {
        let request = CreateUserRequest::from_body(
            br#"{"name":"A","name":"B","email":"d@x.com","Email":"e@x.com"}"#,
        )
        .unwrap();

        assert_eq!(request.name, "B");
        assert_eq!(request.email, "e@x.com");
    }

    #[test]
    fn test_null_field_keeps_previous_value() {
        let request =
            CreateUserRequest::from_body(br#"{"name":"Ann","name":null,"email":"a@b.com"}"#)
                .unwrap();

        assert_eq!(request.name, "Ann");
    }

    #[test]
    fn test_null_body_fails_on_missing_name() {
        let request = CreateUserRequest::from_body(b"null").unwrap();

        match request.into_user() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "user name required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_into_user_checks_name_before_email() {
        let request = CreateUserRequest::from_body(br#"{}"#).unwrap();
        match request.into_user() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "user name required"),
            other => panic!("unexpected result: {:?}", other),
        }

        let request = CreateUserRequest::from_body(br#"{"name":"Ann"}"#).unwrap();
        match request.into_user() {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "email required"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_into_user_keeps_fields() {
        let user = CreateUserRequest {
            name: "Ann".into(),
            email: "ann@x.com".into(),
        }
        .into_user()
        .unwrap();

        assert_eq!(user, User { name: "Ann".into(), email: "ann@x.com".into() });
    }
}
