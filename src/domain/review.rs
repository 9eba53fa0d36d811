//! Review - Student Testimonial

/// A student review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: u32,
    pub author: &'static str,
    /// Star rating, 1..=5
    pub rating: u8,
    /// Translation key for the review text
    pub text_key: &'static str,
    /// Short course label shown under the author
    pub course_label: &'static str,
}

impl Review {
    /// Filled and empty stars, e.g. "★★★★☆"
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.clamp(1, 5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        let review = Review {
            id: 1,
            author: "A",
            rating: 4,
            text_key: "reviews.review1",
            course_label: "Web",
        };
        assert_eq!(review.stars(), "★★★★☆");
    }

    #[test]
    fn test_stars_clamped() {
        let review = Review {
            id: 2,
            author: "B",
            rating: 9,
            text_key: "reviews.review2",
            course_label: "Web",
        };
        assert_eq!(review.stars().chars().count(), 5);
    }
}
