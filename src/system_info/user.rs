use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub domain: String,
    pub user: String,
}

impl UserInfo {
    /// `machine_name` stands in for the domain when the host is not joined
    /// to one.
    pub fn new(machine_name: &str) -> Self {
        let user = get_user_name()
            .or_else(|err| {
                tracing::warn!("Falling back to environment for user name: {err:#}");
                env_user_name()
            })
            .unwrap_or_else(|_| "Unknown".to_string());

        UserInfo {
            domain: std::env::var("USERDOMAIN")
                .ok()
                .filter(|domain| !domain.is_empty())
                .unwrap_or_else(|| machine_name.to_string()),
            user,
        }
    }
}

fn env_user_name() -> Result<String> {
    user_name_from(|name| std::env::var(name).ok())
}

/// First non-empty of `USER`, `USERNAME`, `LOGNAME`.
fn user_name_from(lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.is_empty())
        .ok_or_else(|| anyhow::anyhow!("No user name in environment"))
}

#[cfg(unix)]
fn get_user_name() -> Result<String> {
    use std::ffi::CStr;

    let mut buffer = vec![0 as libc::c_char; 4096];
    let mut passwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    let status = unsafe {
        libc::getpwuid_r(
            libc::geteuid(),
            &mut passwd,
            buffer.as_mut_ptr(),
            buffer.len(),
            &mut result,
        )
    };
    if status != 0 || result.is_null() || passwd.pw_name.is_null() {
        return Err(anyhow::anyhow!("No passwd entry for the effective user"));
    }

    Ok(unsafe { CStr::from_ptr(passwd.pw_name) }
        .to_string_lossy()
        .into_owned())
}

#[cfg(not(unix))]
fn get_user_name() -> Result<String> {
    env_user_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[cfg(unix)]
    #[test]
    fn test_get_user_name_matches_passwd_or_fails_cleanly() {
        match get_user_name() {
            Ok(name) => assert!(!name.is_empty()),
            Err(err) => assert!(err.to_string().contains("No passwd entry")),
        }
    }

    #[test]
    fn test_user_name_fallback_order() -> Result<()> {
        let name = user_name_from(lookup_from(&[
            ("USER", ""),
            ("USERNAME", "winuser"),
            ("LOGNAME", "loguser"),
        ]))?;
        assert_eq!(name, "winuser");

        let name = user_name_from(lookup_from(&[("USER", "alice"), ("LOGNAME", "bob")]))?;
        assert_eq!(name, "alice");

        let name = user_name_from(lookup_from(&[("LOGNAME", "bob")]))?;
        assert_eq!(name, "bob");
        Ok(())
    }

    #[test]
    fn test_user_name_missing_from_environment() {
        let err = user_name_from(lookup_from(&[("USER", "")])).unwrap_err();
        assert!(err.to_string().contains("No user name"));
    }

    #[test]
    fn test_user_info() {
        let user_info = UserInfo::new("test-host");
        assert!(!user_info.user.is_empty());
        assert!(!user_info.domain.is_empty());
    }
}
