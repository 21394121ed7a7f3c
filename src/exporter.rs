use std::path::Path;

use log::info;

use crate::error::PipelineError;
use crate::models::{Article, Post};

/// Writes articles as `Title,Link` rows in sequence order.
///
/// No partial-write recovery: a failure mid-write can leave a truncated
/// file behind, which is acceptable for a single-shot batch tool.
pub fn export_articles(articles: &[Article], path: &Path) -> Result<(), PipelineError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Title", "Link"])?;
    for article in articles {
        writer.write_record([article.title.as_str(), article.link.as_str()])?;
    }
    writer.flush()?;

    info!("Data exported to {}", path.display());
    Ok(())
}

/// Writes posts as `date,timestamp,title` rows, the derived date leading as
/// the row key.
pub fn export_posts(posts: &[Post], path: &Path) -> Result<(), PipelineError> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["date", "timestamp", "title"])?;
    for post in posts {
        writer.write_record([
            post.date.to_string().as_str(),
            post.timestamp.to_string().as_str(),
            post.title.as_str(),
        ])?;
    }
    writer.flush()?;

    info!("Data exported to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_csv(name: &str) -> PathBuf {
        env::temp_dir().join(format!("clippings_{}_{}.csv", name, std::process::id()))
    }

    #[test]
    fn test_articles_round_trip() {
        let path = temp_csv("articles");
        let articles = vec![
            Article {
                title: "A".to_string(),
                link: "/a".to_string(),
            },
            Article {
                title: "B".to_string(),
                link: "/b".to_string(),
            },
        ];

        export_articles(&articles, &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Title,Link\nA,/a\nB,/b\n");

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), articles.len());
        for (row, article) in rows.iter().zip(&articles) {
            assert_eq!(&row[0], article.title);
            assert_eq!(&row[1], article.link);
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_posts_round_trip_with_leading_date() {
        let path = temp_csv("posts");
        let posts = vec![
            Post::from_timestamp(1700000000, "X".to_string()).unwrap(),
            Post::from_timestamp(1700003600, "Y".to_string()).unwrap(),
        ];

        export_posts(&posts, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["date", "timestamp", "title"])
        );

        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);
        // same UTC day, original order preserved
        assert_eq!(&rows[0][0], &rows[1][0]);
        assert_eq!(&rows[0][1], "1700000000");
        assert_eq!(&rows[0][2], "X");
        assert_eq!(&rows[1][1], "1700003600");
        assert_eq!(&rows[1][2], "Y");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_fields_with_commas_survive_round_trip() {
        let path = temp_csv("quoted");
        let articles = vec![Article {
            title: "Markets fall, again".to_string(),
            link: "/markets?a=1,2".to_string(),
        }];

        export_articles(&articles, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[0], "Markets fall, again");
        assert_eq!(&row[1], "/markets?a=1,2");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_empty_sequence_writes_header_only() {
        let path = temp_csv("empty");

        export_articles(&[], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Title,Link\n");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unwritable_destination_is_io_error() {
        let path = env::temp_dir()
            .join("clippings_missing_dir_for_sure")
            .join("out.csv");

        let err = export_articles(&[], &path).unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
        // nothing was created on the failed path
        assert!(!path.exists());
    }
}
