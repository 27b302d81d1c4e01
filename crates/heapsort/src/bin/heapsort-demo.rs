use anyhow::{Context, Result, bail};
use heapsort::{HeapSorter, SortOrder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LEN: usize = 30;
const VALUE_BOUND: u32 = 100;

#[derive(Debug)]
struct Options {
    len: usize,
    order: SortOrder,
    seed: Option<u64>,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let mut options = Self {
            len: DEFAULT_LEN,
            order: SortOrder::Natural,
            seed: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--len" => {
                    let value = args.next().context("--len expects a value")?;
                    options.len = value
                        .parse()
                        .with_context(|| format!("invalid --len value `{value}`"))?;
                }
                "--seed" => {
                    let value = args.next().context("--seed expects a value")?;
                    let seed = value
                        .parse()
                        .with_context(|| format!("invalid --seed value `{value}`"))?;
                    options.seed = Some(seed);
                }
                "--reverse" => options.order = SortOrder::Reversed,
                other => bail!("unknown argument `{other}`"),
            }
        }
        Ok(options)
    }
}

fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u32> {
    (0..len).map(|_| rng.random_range(0..VALUE_BOUND)).collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse(std::env::args().skip(1))?;
    debug!(?options, "parsed options");

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut numbers = generate(&mut rng, options.len);
    println!("{numbers:?}");

    let mut sorter = HeapSorter::with_order(&mut numbers, options.order);
    let mut steps = 0_usize;
    while !sorter.is_finished() {
        sorter.sort_step();
        steps += 1;
    }
    info!(len = options.len, order = options.order.name(), steps, "sorted");

    for number in &numbers {
        println!("{number}");
    }
    Ok(())
}
