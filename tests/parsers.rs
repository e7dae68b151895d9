use chrono::NaiveDate;
use lunch_menus::scrapers::{bistro, canteen, cookpoint, kanas, nepal};
use lunch_menus::utils::{clean_price, strip_footnotes};
use lunch_menus::{MenuItem, ParserKey};

const BISTRO: &str = include_str!("fixtures/bistro.html");
const CANTEEN: &str = include_str!("fixtures/canteen.html");
const COOKPOINT: &str = include_str!("fixtures/cookpoint.html");
const KANAS: &str = include_str!("fixtures/kanas.html");
const NEPAL: &str = include_str!("fixtures/nepal.html");

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Wednesday.
fn reference_date() -> NaiveDate {
    date(2025, 3, 5)
}

fn items(expected: &[(&str, &str)]) -> Vec<MenuItem> {
    expected
        .iter()
        .map(|(name, price)| MenuItem {
            dish_name: name.to_string(),
            price: price.to_string(),
        })
        .collect()
}

#[test]
fn test_bistro_fixture() {
    assert_eq!(
        bistro::parse(BISTRO, reference_date()),
        items(&[
            ("Gulášová polévka", "45"),
            ("Svíčková na smetaně, houskový knedlík", "189"),
            ("Smažený hermelín, hranolky", "159"),
        ])
    );
}

#[test]
fn test_bistro_fixture_weekend() {
    assert!(bistro::parse(BISTRO, date(2025, 3, 8)).is_empty());
    assert!(bistro::parse(BISTRO, date(2025, 3, 9)).is_empty());
}

#[test]
fn test_canteen_fixture() {
    assert_eq!(
        canteen::parse(CANTEEN, reference_date()),
        items(&[
            ("Polévka zeleninová s kroupami", "22 / 32"),
            ("Kuřecí nudličky na kari, jasmínová rýže", "89 / 119"),
            ("Menu 2 pro studenty: smažený květák, brambory", "82 / 109"),
            ("Vegetariánské lasagne", "86"),
        ])
    );
}

#[test]
fn test_cookpoint_fixture() {
    assert_eq!(
        cookpoint::parse(COOKPOINT, reference_date()),
        items(&[
            ("Kulajda s vejcem", "49"),
            ("Hovězí guláš, houskový knedlík", "165"),
            ("Kuřecí steak, grilovaná zelenina", "175"),
            ("Caesar salát", "155"),
        ])
    );
}

#[test]
fn test_kanas_fixture() {
    assert_eq!(
        kanas::parse(KANAS, reference_date()),
        items(&[
            ("Polévka hovězí s játrovými knedlíčky", "35"),
            ("Vepřo, knedlo, zelo", "129"),
            ("Těstovinový salát s kuřecím masem", "119"),
        ])
    );
}

#[test]
fn test_nepal_fixture() {
    assert_eq!(
        nepal::parse(NEPAL, reference_date()),
        items(&[
            ("Polévka dal", "39"),
            ("Chicken tikka masala", "169"),
            ("Palak paneer", "159"),
        ])
    );
    assert_eq!(
        nepal::parse(NEPAL, date(2025, 3, 15)),
        items(&[("Momo", "139")])
    );
    assert!(nepal::parse(NEPAL, date(2025, 3, 6)).is_empty());
}

#[test]
fn test_parsers_never_emit_untrimmed_or_empty_names() {
    let fixtures = [
        (ParserKey::Bistro, BISTRO),
        (ParserKey::Canteen, CANTEEN),
        (ParserKey::Cookpoint, COOKPOINT),
        (ParserKey::Kanas, KANAS),
        (ParserKey::Nepal, NEPAL),
    ];
    for day in 3..=9 {
        for (key, html) in fixtures {
            for item in (key.parser())(html, date(2025, 3, day)) {
                assert!(!item.dish_name.is_empty(), "{key}: empty name");
                assert_ne!(item.dish_name, "----", "{key}: placeholder");
                assert_eq!(item.dish_name.trim(), item.dish_name, "{key}: untrimmed");
                assert_eq!(clean_price(&item.price), item.price, "{key}: dirty price");
            }
        }
    }
}

#[test]
fn test_normalization_is_stable_on_parser_output() {
    for item in canteen::parse(CANTEEN, reference_date())
        .into_iter()
        .chain(kanas::parse(KANAS, reference_date()))
    {
        assert_eq!(strip_footnotes(&item.dish_name), item.dish_name);
    }
}

#[test]
fn test_fixtures_are_independent_of_other_layouts() {
    // a page only means something to its own parser family
    assert!(canteen::parse(BISTRO, reference_date()).is_empty());
    assert!(kanas::parse(COOKPOINT, reference_date()).is_empty());
    assert!(nepal::parse(KANAS, reference_date()).is_empty());
    assert!(bistro::parse(NEPAL, reference_date()).is_empty());
}
