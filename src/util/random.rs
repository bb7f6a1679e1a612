//! Random identifiers and display names.

use rand::seq::SliceRandom;
use rand::Rng;
use web_time::{Duration, SystemTime, UNIX_EPOCH};

/// Adjectives [`random_name()`] picks from.
pub const ADJECTIVES: &[&str] = &[
	"adamant",
	"adroit",
	"amatory",
	"animistic",
	"antic",
	"arcadian",
	"baleful",
	"bellicose",
	"bilious",
	"boorish",
	"calamitous",
	"caustic",
	"cerulean",
	"comely",
	"concomitant",
	"contumacious",
	"corpulent",
	"cromulent",
	"defamatory",
	"didactic",
	"dilatory",
	"dowdy",
	"efficacious",
	"effulgent",
	"egregious",
	"endemic",
	"equanimous",
	"fastidious",
	"feckless",
	"friable",
	"fulsome",
	"garrulous",
	"guileless",
	"gustatory",
	"heuristic",
	"histrionic",
	"hubristic",
	"incendiary",
	"insidious",
	"insolent",
	"intransigent",
	"inveterate",
	"invidious",
	"irksome",
	"jejune",
	"jocular",
	"judicious",
	"lachrymose",
	"limpid",
	"loquacious",
	"luminous",
	"mannered",
	"mendacious",
	"meretricious",
	"minatory",
	"mordant",
	"munificent",
	"nefarious",
	"noxious",
	"obtuse",
	"parsimonious",
	"pendulous",
	"pernicious",
	"pervasive",
	"petulant",
	"platitudinous",
	"precipitate",
	"propitious",
	"puckish",
	"querulous",
	"quiescent",
	"rebarbative",
	"recalcitrant",
	"redolent",
	"rhadamanthine",
	"risible",
	"ruminative",
	"sagacious",
	"salubrious",
	"sartorial",
	"sclerotic",
	"serpentine",
	"spasmodic",
	"strident",
	"taciturn",
	"tenacious",
	"tremulous",
	"trenchant",
	"turbulent",
	"turgid",
	"ubiquitous",
	"uxorious",
	"verdant",
	"voluble",
	"voracious",
	"wheedling",
	"withering",
	"zealous",
];

/// Nouns [`random_name()`] picks from.
pub const NOUNS: &[&str] = &[
	"ninja",
	"chair",
	"pancake",
	"statue",
	"unicorn",
	"rainbows",
	"laser",
	"senor",
	"bunny",
	"captain",
	"nibblets",
	"cupcake",
	"carrot",
	"gnomes",
	"glitter",
	"potato",
	"salad",
	"marjoram",
	"curtains",
	"beets",
	"toiletries",
	"exorcism",
	"stick figures",
	"mermaid eggs",
	"sea barnacles",
	"dragons",
	"jellybeans",
	"snakes",
	"dolls",
	"bushes",
	"cookies",
	"apples",
	"ice cream",
	"ukulele",
	"kazoo",
	"banjo",
	"opera singer",
	"circus",
	"trampoline",
	"carousel",
	"carnival",
	"locomotive",
	"hot air balloon",
	"praying mantis",
	"animator",
	"artisan",
	"artist",
	"colorist",
	"inker",
	"coppersmith",
	"director",
	"designer",
	"flatter",
	"stylist",
	"leadman",
	"limner",
	"make-up artist",
	"model",
	"musician",
	"penciller",
	"producer",
	"stenographer",
	"set decorator",
	"silversmith",
	"teacher",
	"auto mechanic",
	"beader",
	"bobbin boy",
	"clerk of the chapel",
	"filling station attendant",
	"foreman",
	"maintenance engineering",
	"mechanic",
	"miller",
	"moldmaker",
	"panel beater",
	"patternmaker",
	"plant operator",
	"plumber",
	"sawfiler",
	"shop foreman",
	"soaper",
	"stationary engineer",
	"wheelwright",
	"woodworkers",
];

/// Base-36 digits of the random part, the precision of an `f64` fraction.
const RANDOM_DIGITS: usize = 11;

/// Returns a new random id, see [`random_id_with()`].
#[must_use]
pub fn random_id() -> String {
	let now = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.unwrap_or_default();

	random_id_with(now, &mut rand::thread_rng())
}

/// Returns a random id made of the base-36 timestamp `now`, without its two
/// leading digits, followed by base-36 random digits.
///
/// Ids are distinct with overwhelming probability, but not guaranteed to be
/// unique.
#[must_use]
pub fn random_id_with<R: Rng + ?Sized>(now: Duration, rng: &mut R) -> String {
	let time = to_base36(now.as_millis());
	let mut id: String = time.chars().skip(2).collect();

	let mut fraction: f64 = rng.gen();
	let mut digits = String::with_capacity(RANDOM_DIGITS);

	while fraction > 0. && digits.len() < RANDOM_DIGITS {
		fraction *= 36.;
		let digit = fraction.floor();
		fraction -= digit;
		#[allow(
			clippy::as_conversions,
			clippy::cast_possible_truncation,
			clippy::cast_sign_loss
		)]
		let digit = digit as u32;
		digits.push(base36_digit(digit));
	}

	id.push_str(digits.trim_end_matches('0'));
	id
}

/// Returns a random `adjective-noun` name, see [`random_name_with()`].
#[must_use]
pub fn random_name() -> String {
	random_name_with(&mut rand::thread_rng())
}

/// Returns a random `adjective-noun` name from [`ADJECTIVES`] and [`NOUNS`],
/// with spaces replaced by `-`.
#[must_use]
pub fn random_name_with<R: Rng + ?Sized>(rng: &mut R) -> String {
	let adjective = ADJECTIVES.choose(rng).copied().unwrap_or_default();
	let noun = NOUNS.choose(rng).copied().unwrap_or_default();

	format!("{adjective}-{noun}").replace(' ', "-")
}

/// Formats `value` in base 36 with lowercase digits.
fn to_base36(mut value: u128) -> String {
	let mut digits = Vec::new();

	loop {
		#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
		let digit = (value % 36) as u32;
		digits.push(base36_digit(digit));
		value /= 36;

		if value == 0 {
			break;
		}
	}

	digits.iter().rev().collect()
}

/// Single lowercase base-36 digit.
fn base36_digit(digit: u32) -> char {
	char::from_digit(digit, 36).unwrap_or('0')
}
