use crate::reports;
use clap::Args;
use morseref::code;
use morseref::consts::CODE_SPACE;

#[derive(Args, Debug, Clone)]
pub struct ListingArgs {
    /// List values below this bound (capped at the full code space)
    #[arg(long, default_value_t = CODE_SPACE)]
    pub max: usize,
}

pub fn run(args: &ListingArgs) {
    let codes = code::listing(args.max);
    println!("{}", reports::format_listing(&codes));
}
