use chrono::{DateTime, NaiveDate};

/// One article extracted from the news page. `link` keeps the raw href
/// attribute value, relative or absolute, exactly as the page served it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub link: String,
}

/// One post returned by a subreddit search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub timestamp: i64,
    pub title: String,
    pub date: NaiveDate,
}

impl Post {
    /// Builds a post, deriving `date` by truncating the epoch timestamp to
    /// UTC day granularity. Returns `None` for timestamps chrono cannot
    /// represent.
    pub fn from_timestamp(timestamp: i64, title: String) -> Option<Post> {
        let date = DateTime::from_timestamp(timestamp, 0)?.date_naive();
        Some(Post {
            timestamp,
            title,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_timestamp_truncated_to_day() {
        let post = Post::from_timestamp(1700000000, "X".to_string()).unwrap();
        assert_eq!(post.date.to_string(), "2023-11-14");
        assert_eq!(post.timestamp, 1700000000);
    }

    #[test]
    fn test_same_day_timestamps_share_a_date() {
        let x = Post::from_timestamp(1700000000, "X".to_string()).unwrap();
        let y = Post::from_timestamp(1700003600, "Y".to_string()).unwrap();
        assert_eq!(x.date, y.date);
    }

    #[test]
    fn test_out_of_range_timestamp_is_rejected() {
        assert!(Post::from_timestamp(i64::MAX, "bad".to_string()).is_none());
    }
}
