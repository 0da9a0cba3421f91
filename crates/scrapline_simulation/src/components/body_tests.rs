//! Tests for body components.

#[cfg(test)]
mod tests {
    use crate::components::body::{Body, BodyPart};

    #[test]
    fn test_try_detach_detachable_part() {
        let mut body = Body::new(vec![BodyPart::new("head", true)]);

        let part = body.try_detach(0);

        assert_eq!(part, Some(BodyPart::new("head", true)));
        assert!(body.parts.is_empty());
    }

    #[test]
    fn test_try_detach_refuses_fixed_part() {
        let mut body = Body::new(vec![BodyPart::new("torso", false)]);

        assert_eq!(body.try_detach(0), None);
        assert_eq!(body.parts.len(), 1);
    }

    #[test]
    fn test_try_detach_out_of_range() {
        let mut body = Body::default();

        assert_eq!(body.try_detach(0), None);
    }

    #[test]
    fn test_detach_all_skips_failures_silently() {
        let mut body = Body::humanoid();
        let total = body.parts.len();

        let detached = body.detach_all();

        // Торс не отсоединяется, остальное падает
        assert_eq!(detached.len(), total - 1);
        assert_eq!(body.parts.len(), 1);
        assert_eq!(body.parts[0].slot, "torso");
        assert!(detached.iter().all(|part| part.detachable));
    }

    #[test]
    fn test_detach_all_on_empty_body() {
        let mut body = Body::default();

        assert!(body.detach_all().is_empty());
    }
}
