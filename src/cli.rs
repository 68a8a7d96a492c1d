use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "boardshot", about = "Turns a saved board into a screenshot")]
pub struct Cli {
    #[structopt(help = "Saved board file")]
    pub board: String,

    #[structopt(help = "Output PPM image")]
    pub image: String,
}
