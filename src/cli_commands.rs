use clap::Args;

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CreateArgs {
    /// Note title
    #[arg(long)]
    pub(crate) title: String,
    /// Note content
    #[arg(long)]
    pub(crate) content: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct UpdateArgs {
    /// Id of the note to update
    pub(crate) id: String,
    /// New title
    #[arg(long)]
    pub(crate) title: String,
    /// New content
    #[arg(long)]
    pub(crate) content: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct DeleteArgs {
    /// Id of the note to delete
    pub(crate) id: String,
}
