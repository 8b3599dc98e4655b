use argh::FromArgs;

/// test
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "test")]
pub(crate) struct TestTask {
    /// run all targets
    #[argh(switch, short = 'a')]
    all: bool,
}

impl TestTask {
    pub fn handle(self) -> Result<(), Box<dyn std::error::Error>> {
        if self.all {
            duct::cmd!("cargo", "test", "--all-features", "--no-fail-fast").run()?;
        } else {
            duct::cmd!("cargo", "test", "--lib").run()?;
        }

        Ok(())
    }
}
