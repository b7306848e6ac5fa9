/// Report published as a pull request comment.
///
/// The title doubles as the identity of the comment: a comment "belongs" to a
/// report when its body contains the title. This is a substring test, so a
/// short or common title can match unrelated comments, and a title contained
/// in another report's body will collide with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    title: String,
    summary: String,
}

impl Report {
    pub fn new<T: Into<String>, S: Into<String>>(title: T, summary: S) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the comment body.
    pub fn render(&self) -> String {
        format!("### {}\n\n{}", self.title, self.summary)
    }

    /// Check if a comment body is identified by this report title.
    pub fn is_identified_by(&self, body: &str) -> bool {
        body.contains(&self.title)
    }
}
