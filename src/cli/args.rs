use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Only posts carrying this tag slug
    #[arg(long, short)]
    pub tag: Option<String>,

    /// Page number; invalid values select the first page, out of range the last
    #[arg(long, short)]
    pub page: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub slug: String,
}

#[derive(Args, Debug, Clone)]
pub struct SimilarArgs {
    /// Post ID
    pub id: i64,

    /// Maximum number of posts (defaults to `blog.similar_posts`)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Search query; an empty query finds nothing
    pub query: Option<String>,

    /// Pass the query to the full-text engine unchanged (phrases, OR, NOT, prefix*)
    #[arg(long)]
    pub raw: bool,

    /// Maximum number of results (defaults to `search.default_limit`)
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ShareArgs {
    /// Post ID
    pub id: i64,

    /// Your name
    #[arg(long)]
    pub name: String,

    /// Your email address
    #[arg(long)]
    pub email: String,

    /// Recipient email address
    #[arg(long)]
    pub to: String,

    /// Optional note to the recipient
    #[arg(long, default_value = "")]
    pub comments: String,
}
