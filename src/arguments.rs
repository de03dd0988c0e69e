use super::*;

#[derive(Debug, Parser)]
#[clap(about = "Measure typing speed and accuracy against a sample text")]
pub(crate) struct Arguments {
  #[clap(
    long,
    short,
    value_enum,
    ignore_case = true,
    default_value_t = Difficulty::Low,
    help = "Sample text to select"
  )]
  difficulty: Difficulty,
  #[clap(long, short, help = "Start the test immediately")]
  start: bool,
}

impl Arguments {
  pub(crate) fn run(self) -> Result {
    let mut app = App::new(self.difficulty);

    if self.start {
      app.start()?;
    }

    app.run()
  }
}
