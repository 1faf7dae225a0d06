//! Parameters of `user.login`.

use serde::Serialize;

/// Credentials sent to `user.login`.
///
/// Zabbix 5.4 names the login field `user`; it was renamed to `username` in
/// 6.0.
#[derive(Serialize)]
pub struct LoginParams<'a> {
    pub user: &'a str,
    pub password: &'a str,
}

impl std::fmt::Debug for LoginParams<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginParams")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_params_wire_format() {
        let params = LoginParams {
            user: "Admin",
            password: "zabbix",
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"user": "Admin", "password": "zabbix"})
        );
        assert!(!format!("{params:?}").contains("zabbix"));
    }
}
