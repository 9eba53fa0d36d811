//! Catalog - Static Courses, Schedule and Reviews
//!
//! Seeded at compile time and never mutated.

use super::course::{Course, CourseLevel};
use super::review::Review;
use super::schedule::{ScheduleEntry, Weekday};

const COVER_IMAGE: &str = "/img/dc989b8f-6997-4193-8c54-bed64786ef1a.jpg";
const INTRO_VIDEO: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

static COURSES: [Course; 3] = [
    Course {
        id: 1,
        title: "Web Development Basics",
        title_key: "courses.webDev",
        description_key: "courses.webDevDesc",
        image: COVER_IMAGE,
        level: CourseLevel::Beginner,
        duration_weeks: 8,
        rating: 4.8,
        student_count: 1234,
        intro_video_url: INTRO_VIDEO,
    },
    Course {
        id: 2,
        title: "React Advanced Patterns",
        title_key: "courses.reactAdv",
        description_key: "courses.reactAdvDesc",
        image: COVER_IMAGE,
        level: CourseLevel::Advanced,
        duration_weeks: 6,
        rating: 4.9,
        student_count: 856,
        intro_video_url: INTRO_VIDEO,
    },
    Course {
        id: 3,
        title: "UI/UX Design Principles",
        title_key: "courses.uiux",
        description_key: "courses.uiuxDesc",
        image: COVER_IMAGE,
        level: CourseLevel::Intermediate,
        duration_weeks: 5,
        rating: 4.7,
        student_count: 2100,
        intro_video_url: INTRO_VIDEO,
    },
];

static SCHEDULE: [ScheduleEntry; 5] = [
    ScheduleEntry {
        day: Weekday::Monday,
        time: "10:00 AM",
        course_title: "Web Development Basics",
        instructor: "John Smith",
    },
    ScheduleEntry {
        day: Weekday::Tuesday,
        time: "2:00 PM",
        course_title: "React Advanced Patterns",
        instructor: "Sarah Johnson",
    },
    ScheduleEntry {
        day: Weekday::Wednesday,
        time: "11:00 AM",
        course_title: "UI/UX Design Principles",
        instructor: "Mike Chen",
    },
    ScheduleEntry {
        day: Weekday::Thursday,
        time: "3:00 PM",
        course_title: "Web Development Basics",
        instructor: "John Smith",
    },
    ScheduleEntry {
        day: Weekday::Friday,
        time: "1:00 PM",
        course_title: "React Advanced Patterns",
        instructor: "Sarah Johnson",
    },
];

static REVIEWS: [Review; 3] = [
    Review {
        id: 1,
        author: "Anna Petrova",
        rating: 5,
        text_key: "reviews.review1",
        course_label: "Web Development",
    },
    Review {
        id: 2,
        author: "Dmitry Ivanov",
        rating: 5,
        text_key: "reviews.review2",
        course_label: "React Advanced",
    },
    Review {
        id: 3,
        author: "Elena Sidorova",
        rating: 4,
        text_key: "reviews.review3",
        course_label: "UI/UX Design",
    },
];

/// All courses, in display order
pub fn courses() -> &'static [Course] {
    &COURSES
}

/// Weekly schedule rows
pub fn schedule() -> &'static [ScheduleEntry] {
    &SCHEDULE
}

/// Student reviews
pub fn reviews() -> &'static [Review] {
    &REVIEWS
}

/// Look up a course by id
pub fn find_course(id: u32) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{get_dictionary, Language};
    use std::collections::HashSet;

    #[test]
    fn test_course_ids_unique() {
        let ids: HashSet<_> = courses().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), courses().len());
    }

    #[test]
    fn test_find_course() {
        assert_eq!(find_course(2).map(|c| c.title), Some("React Advanced Patterns"));
        assert!(find_course(99).is_none());
    }

    #[test]
    fn test_catalog_keys_translated() {
        let dict = get_dictionary(Language::Ru);
        for course in courses() {
            assert!(dict.contains(course.title_key));
            assert!(dict.contains(course.description_key));
            assert!(dict.contains(course.level.label_key()));
        }
        for entry in schedule() {
            assert!(dict.contains(entry.day.label_key()));
        }
        for review in reviews() {
            assert!(dict.contains(review.text_key));
            assert!((1..=5).contains(&review.rating));
        }
    }

    #[test]
    fn test_english_titles_match_dictionary() {
        let dict = get_dictionary(Language::En);
        for course in courses() {
            assert_eq!(dict.get(course.title_key), course.title);
        }
    }
}
