/*! DD: Divided differences of auxiliary latitudes !*/
use clap::Parser;
use dauxlat::prelude::*;
use log::{debug, info};

/// DD: Compute the divided difference of the conversion between two
/// kinds of auxiliary latitude, for a pair of latitudes given in degrees.
///
/// The latitudes are on the scale given by --from. Kinds: geographic,
/// parametric, geocentric, rectifying, conformal, authalic (or their
/// alternative names: geodetic, reduced, phi, beta, theta, mu, chi, xi).
#[derive(Parser, Debug)]
#[clap(name = "dd")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The ellipsoid: a built-in name, or "a, rf"
    #[clap(short, long, default_value = "GRS80")]
    ellps: String,

    /// The kind of the input latitudes
    #[clap(short, long, default_value = "geographic")]
    from: AuxKind,

    /// The kind of the output latitudes
    #[clap(short, long, default_value = "conformal")]
    to: AuxKind,

    /// Compute in single precision
    #[clap(long)]
    single: bool,

    /// List the built-in ellipsoids and exit
    #[clap(long)]
    list: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The two latitudes, in degrees
    #[clap(allow_negative_numbers = true, num_args = 2, required_unless_present = "list")]
    latitudes: Vec<f64>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{:#?}", options);

    if options.list {
        for (name, description) in Ellipsoid::builtins() {
            println!("{name:<10}{description}");
        }
        return Ok(());
    }

    let ellps = Ellipsoid::named(&options.ellps)?;
    info!("Ellipsoid: a = {}, f = {}", ellps.semimajor_axis(), ellps.flattening());

    let [lat1, lat2] = options.latitudes[..] else {
        anyhow::bail!("Expected exactly two latitudes, got {}", options.latitudes.len());
    };

    if options.single {
        report::<f32>(&ellps, options.from, options.to, lat1 as f32, lat2 as f32);
    } else {
        report::<f64>(&ellps, options.from, options.to, lat1, lat2);
    }
    Ok(())
}

fn report<T: Real>(ellps: &Ellipsoid, from: AuxKind, to: AuxKind, lat1: T, lat2: T) {
    let dal = DAuxLatitude::<T>::from_ellipsoid(ellps);
    let zeta1 = AuxAngle::from_degrees(lat1);
    let zeta2 = AuxAngle::from_degrees(lat2);

    let out1 = dal.convert(from, to, zeta1.radians()).to_degrees();
    let out2 = dal.convert(from, to, zeta2.radians()).to_degrees();
    println!("{} {lat1} {lat2}", from.symbol());
    println!("{} {out1} {out2}", to.symbol());
    println!("d{}/d{} {}", to.symbol(), from.symbol(), dal.d_convert(from, to, &zeta1, &zeta2));

    // The closed forms are with respect to the geographic latitude
    if from == AuxKind::Geographic {
        println!("d𝜓/d𝜙 {}", dal.d_isometric(&zeta1, &zeta2));
        match to {
            AuxKind::Parametric => println!("closed form {}", dal.d_parametric(&zeta1, &zeta2)),
            AuxKind::Rectifying => println!("closed form {}", dal.d_rectifying(&zeta1, &zeta2)),
            _ => (),
        }
    }
}
