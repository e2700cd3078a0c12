//! Route labels for request spans.

/// Collapse numeric path segments so `/api/foods/7` logs as `/api/foods/{id}`.
pub(super) fn route_pattern(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut pattern = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            pattern.push('/');
        }

        if !segment.is_empty() && segment.bytes().all(|byte| byte.is_ascii_digit()) {
            pattern.push_str("{id}");
        } else {
            pattern.push_str(segment);
        }
    }

    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_become_placeholders() {
        assert_eq!(route_pattern("/api/orders/12/status"), "/api/orders/{id}/status");
        assert_eq!(route_pattern("/api/orders/user"), "/api/orders/user");
        assert_eq!(route_pattern("/"), "/");
    }
}
