use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum ESTarget {
  Es2015,
  Es2016,
  Es2017,
  Es2018,
  Es2019,
  Es2020,
}

impl From<ESTarget> for gaspack::ESTarget {
  fn from(value: ESTarget) -> Self {
    match value {
      ESTarget::Es2015 => gaspack::ESTarget::Es2015,
      ESTarget::Es2016 => gaspack::ESTarget::Es2016,
      ESTarget::Es2017 => gaspack::ESTarget::Es2017,
      ESTarget::Es2018 => gaspack::ESTarget::Es2018,
      ESTarget::Es2019 => gaspack::ESTarget::Es2019,
      ESTarget::Es2020 => gaspack::ESTarget::Es2020,
    }
  }
}
