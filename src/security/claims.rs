use serde::{Deserialize, Serialize};

/// JWT payload issued by the platform's login service.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserClaims {
    pub sub: String, // User ID (Subject)
    pub name: Option<String>,
    pub exp: usize, // Expiration time (UNIX timestamp)
}

/// The signed-in user, inserted into request extensions by the auth middleware.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub name: Option<String>,
}

impl TryFrom<UserClaims> for CurrentUser {
    type Error = std::num::ParseIntError;

    fn try_from(claims: UserClaims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: claims.sub.trim().parse()?,
            name: claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_subject_becomes_user() {
        let claims = UserClaims {
            sub: "42".into(),
            name: Some("Jane".into()),
            exp: 0,
        };
        let user = CurrentUser::try_from(claims).unwrap();
        assert_eq!(user.id, 42);
    }

    #[test]
    fn non_numeric_subject_is_rejected() {
        let claims = UserClaims {
            sub: "jane".into(),
            name: None,
            exp: 0,
        };
        assert!(CurrentUser::try_from(claims).is_err());
    }
}
