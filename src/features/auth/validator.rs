use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use uuid::Uuid;

use super::model::AuthenticatedUser;
use crate::core::config::AuthConfig;
use crate::core::error::AppError;

/// Validates HS256 bearer tokens minted by the upstream identity provider.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[allow(dead_code)]
    exp: u64,
    #[serde(default)]
    roles: Vec<String>,
}

impl JwtValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.leeway = config.jwt_leeway.as_secs();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let id = Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AppError::Auth("Invalid subject claim".to_string()))?;

        Ok(AuthenticatedUser {
            id,
            roles: data.claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;
    use std::time::Duration;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        iss: String,
        aud: String,
        exp: u64,
        roles: Vec<String>,
    }

    fn make_token(secret: &str, sub: &str, iss: &str, aud: &str, exp_offset_secs: i64) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset_secs) as u64;
        let claims = TestClaims {
            sub: sub.to_string(),
            iss: iss.to_string(),
            aud: aud.to_string(),
            exp,
            roles: vec!["super_admin".to_string()],
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn validator() -> JwtValidator {
        JwtValidator::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            issuer: "issuer".to_string(),
            audience: "audience".to_string(),
            jwt_leeway: Duration::from_secs(0),
        })
    }

    #[test]
    fn valid_token_yields_user() {
        let sub = Uuid::new_v4();
        let token = make_token("test-secret", &sub.to_string(), "issuer", "audience", 3600);

        let user = validator().validate_token(&token).unwrap();
        assert_eq!(user.id, sub);
        assert!(user.is_super_admin());
    }

    #[test]
    fn expired_token_is_rejected() {
        let sub = Uuid::new_v4().to_string();
        let token = make_token("test-secret", &sub, "issuer", "audience", -3600);

        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let sub = Uuid::new_v4().to_string();
        let token = make_token("test-secret", &sub, "issuer", "elsewhere", 3600);

        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn non_uuid_subject_is_rejected() {
        let token = make_token("test-secret", "not-a-uuid", "issuer", "audience", 3600);

        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }
}
