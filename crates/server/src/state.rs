use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, SameSite};

use service::auth::TokenService;
use service::marketplace::{BookingLedger, ServiceCatalog};

/// Shared per-request state. Everything here is cheap to clone; the store
/// handles inside the catalog/ledger are the only long-lived resources.
#[derive(Clone)]
pub struct AppState {
    pub catalog: ServiceCatalog,
    pub bookings: BookingLedger,
    pub tokens: Arc<TokenService>,
    pub cookies: CookieSettings,
}

/// Session cookie attributes, switched by deployment mode: production
/// frontends are served cross-site, so the cookie needs Secure +
/// SameSite=None; local development gets Strict over plain HTTP.
#[derive(Clone)]
pub struct CookieSettings {
    pub production: bool,
}

impl CookieSettings {
    pub const NAME: &'static str = "token";

    pub fn session(&self, token: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(Self::NAME, token);
        self.apply_attributes(&mut cookie);
        cookie
    }

    /// Clearing cookie with an expiry in the past; attributes must match
    /// the ones used when setting.
    pub fn removal(&self) -> Cookie<'static> {
        let mut cookie = Cookie::new(Self::NAME, "");
        self.apply_attributes(&mut cookie);
        cookie.make_removal();
        cookie
    }

    fn apply_attributes(&self, cookie: &mut Cookie<'static>) {
        cookie.set_path("/");
        cookie.set_http_only(true);
        if self.production {
            cookie.set_secure(true);
            cookie.set_same_site(SameSite::None);
        } else {
            cookie.set_secure(false);
            cookie.set_same_site(SameSite::Strict);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_cookie_is_strict_and_insecure() {
        let cookies = CookieSettings { production: false };
        let c = cookies.session("tok".into());
        assert_eq!(c.name(), "token");
        assert_eq!(c.http_only(), Some(true));
        assert_eq!(c.secure(), Some(false));
        assert_eq!(c.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn production_cookie_is_secure_cross_site() {
        let cookies = CookieSettings { production: true };
        let c = cookies.session("tok".into());
        assert_eq!(c.secure(), Some(true));
        assert_eq!(c.same_site(), Some(SameSite::None));
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let cookies = CookieSettings { production: false };
        let c = cookies.removal();
        assert_eq!(c.name(), "token");
        assert_eq!(c.value(), "");
        let encoded = c.to_string();
        assert!(encoded.contains("Max-Age=0"), "{encoded}");
    }
}
