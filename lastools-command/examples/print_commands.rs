use std::path::PathBuf;

use lastools_command::{
    Blast2DemCommand, CommandBuilder as _, LasGroundCommand, LightVector, OutputTarget, Toolkit,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: print_commands <LASTOOLS_DIR> <INPUT.las>");
        std::process::exit(2);
    }
    let toolkit = Toolkit::new(&args[1]);
    let input = PathBuf::from(&args[2]);
    let target = OutputTarget::default();

    let mut ground = LasGroundCommand::new(&input, target.resolve(&input, "grd_", None));
    ground
        .flags
        .enable("stddev", Some("10"))
        .unwrap()
        .enable("terrain", Some("town"))
        .unwrap();
    match ground.build(&toolkit) {
        Ok(cmd) => println!("{}", cmd),
        Err(e) => eprintln!("{}", e),
    }

    let light = LightVector::from_angles(315.0, 45.0, 1.0).unwrap();
    let hillshade =
        Blast2DemCommand::hillshade(&input, target.resolve(&input, "hill_", Some("png")), light)
            .unwrap();
    match hillshade.build(&toolkit) {
        Ok(cmd) => println!("{}", cmd),
        Err(e) => eprintln!("{}", e),
    }
}
