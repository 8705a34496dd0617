use crate::config::Config;
use crate::helper::api_error::ApiError;
use actix_web::{dev, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// Proof that the request comes from an address allowed to use the admin endpoints.
#[derive(Debug)]
pub struct AdminAccess {
    pub client_ip: String,
}

impl FromRequest for AdminAccess {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let config = req.app_data::<web::Data<Config>>();
        let allowed = config.and_then(|c| c.admin_accept_ip.as_deref());
        let trusted = config.and_then(|c| c.trusted_proxy_ips.as_deref());

        ready(check_admin_ip(req, allowed, trusted))
    }
}

fn in_ip_list(list: &str, ip: &str) -> bool {
    list.split(',').any(|entry| entry.trim() == ip)
}

/// Real client IP. `X-Forwarded-For` is only believed when the peer itself is a
/// listed proxy; any other client could set the header to whatever it likes.
pub fn client_ip(req: &HttpRequest, trusted_proxies: Option<&str>) -> Option<String> {
    let peer = req.peer_addr().map(|addr| addr.ip().to_string());

    let via_trusted_proxy = match (&peer, trusted_proxies) {
        (Some(peer), Some(list)) => in_ip_list(list, peer),
        _ => false,
    };
    if !via_trusted_proxy {
        return peer;
    }

    req.headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or(peer)
}

fn check_admin_ip(
    req: &HttpRequest,
    allowed_ips: Option<&str>,
    trusted_proxies: Option<&str>,
) -> Result<AdminAccess, ApiError> {
    let allowed_ips = match allowed_ips {
        Some(val) => val,
        None => {
            log::warn!("ADMIN_ACCEPT_IP is not set. Denying all admin requests.");
            return Err(ApiError::Forbidden);
        }
    };

    let request_ip = client_ip(req, trusted_proxies);

    if allowed_ips.trim() == "*" {
        return Ok(AdminAccess { client_ip: request_ip.unwrap_or_default() });
    }

    let peer = match request_ip {
        Some(ip) => ip,
        None => {
            log::warn!("Could not determine peer IP address for admin request.");
            return Err(ApiError::Forbidden);
        }
    };

    if in_ip_list(allowed_ips, &peer) {
        Ok(AdminAccess { client_ip: peer })
    } else {
        log::warn!("Blocked admin request from unauthorized IP: {}", peer);
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn unset_allow_list_denies_everyone() {
        let req = TestRequest::default().peer_addr("127.0.0.1:4000".parse().unwrap()).to_http_request();
        assert!(check_admin_ip(&req, None, None).is_err());
    }

    #[test]
    fn wildcard_admits_everyone() {
        let req = TestRequest::default().to_http_request();
        assert!(check_admin_ip(&req, Some("*"), None).is_ok());
    }

    #[test]
    fn forwarded_for_from_a_trusted_proxy_names_the_client() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "10.0.0.7, 172.16.0.1"))
            .peer_addr("127.0.0.1:4000".parse().unwrap())
            .to_http_request();

        let access = check_admin_ip(&req, Some("10.0.0.7"), Some("127.0.0.1")).unwrap();
        assert_eq!(access.client_ip, "10.0.0.7");
        assert!(check_admin_ip(&req, Some("127.0.0.1"), Some("127.0.0.1")).is_err());
    }

    #[test]
    fn forwarded_for_from_an_untrusted_peer_is_ignored() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "10.0.0.1"))
            .peer_addr("203.0.113.9:5000".parse().unwrap())
            .to_http_request();

        assert_eq!(client_ip(&req, None).as_deref(), Some("203.0.113.9"));
        assert_eq!(client_ip(&req, Some("198.51.100.1")).as_deref(), Some("203.0.113.9"));
        assert!(check_admin_ip(&req, Some("10.0.0.1"), None).is_err());
        assert!(check_admin_ip(&req, Some("10.0.0.1"), Some("198.51.100.1")).is_err());
    }

    #[test]
    fn peer_address_is_matched_against_the_list() {
        let req = TestRequest::default().peer_addr("192.168.1.5:5555".parse().unwrap()).to_http_request();
        assert!(check_admin_ip(&req, Some("10.0.0.1, 192.168.1.5"), None).is_ok());
        assert!(check_admin_ip(&req, Some("10.0.0.1"), None).is_err());
    }
}
