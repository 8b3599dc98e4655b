use argh::FromArgs;

use self::{format::FormatTask, lint::LintTask, server::ServerTask, test::TestTask};

mod format;
mod lint;
mod server;
mod test;

/// Tasks
#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub(crate) enum Tasks {
    Format(FormatTask),
    Lint(LintTask),
    Test(TestTask),
    Server(ServerTask),
}
