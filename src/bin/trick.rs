use five_card_trick::cards::{Card, CardParseError, Rank, Suit};
use five_card_trick::deck::Deck;
use five_card_trick::display::describe;
use five_card_trick::hand::{Hand, HandError};
use five_card_trick::trick::{decode, encode, TrickError};
use std::process::ExitCode;

const USAGE: &str = "usage: five-card-trick [CARD CARD CARD CARD CARD | --deal SEED | --version]";

const SAMPLE_HAND: [Card; 5] = [
    Card::new(Rank::Ace, Suit::Clubs),
    Card::new(Rank::Five, Suit::Hearts),
    Card::new(Rank::Jack, Suit::Diamonds),
    Card::new(Rank::Queen, Suit::Clubs),
    Card::new(Rank::King, Suit::Spades),
];

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{}", USAGE)]
    Usage,
    #[error("invalid seed '{0}'")]
    Seed(String),
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error(transparent)]
    Trick(#[from] TrickError),
}

fn hand_from_args(args: &[String]) -> Result<Hand, CliError> {
    match args {
        [] => Ok(Hand::try_new(SAMPLE_HAND)?),
        [flag, seed] if flag == "--deal" => {
            let seed = seed.parse::<u64>().map_err(|_| CliError::Seed(seed.clone()))?;
            let mut deck = Deck::standard();
            deck.shuffle_seeded(seed);
            Ok(deck.deal_hand()?)
        }
        [flag, ..] if flag.starts_with('-') => Err(CliError::Usage),
        cards if cards.len() == Hand::SIZE => {
            let cards = cards.iter().map(|s| s.parse::<Card>()).collect::<Result<Vec<_>, _>>()?;
            Ok(Hand::from_slice(&cards)?)
        }
        _ => Err(CliError::Usage),
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    if let [flag] = args {
        if flag == "--version" {
            println!("five-card-trick {}", five_card_trick::VERSION);
            return Ok(());
        }
    }
    let hand = hand_from_args(args)?;

    println!("\n\nFive Card Puzzle!\n");
    println!("Cards given to Alice:");
    for card in hand.as_array() {
        println!("{}", describe(card));
    }

    // Alice hides one card and hands the rest back in a chosen order
    let encoding = encode(&hand)?;
    println!("\n\nHidden card by Alice:\n{}", describe(encoding.hidden));

    println!("\nCards given back to Bob:");
    for card in encoding.visible.as_array() {
        println!("{}", describe(card));
    }

    let guess = decode(&encoding.visible)?;
    println!("\n\nGuessed Card:\n{}", describe(guess));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
