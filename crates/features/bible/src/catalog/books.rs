//! Book names, common abbreviations and their USFM codes.

/// A canonical book known to the upstream site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub usfm: &'static str,
    pub name: &'static str,
    /// Upper-case, space-free abbreviations.
    pub aliases: &'static [&'static str],
}

/// The book a request refers to, known or passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRef {
    pub usfm: String,
    pub name: String,
}

impl From<&Book> for BookRef {
    fn from(book: &Book) -> Self {
        Self { usfm: book.usfm.to_owned(), name: book.name.to_owned() }
    }
}

macro_rules! book {
    ($usfm:literal, $name:literal $(, $alias:literal)* $(,)?) => {
        Book { usfm: $usfm, name: $name, aliases: &[$($alias),*] }
    };
}

pub static BOOKS: &[Book] = &[
    book!("GEN", "Genesis", "GN", "GE"),
    book!("EXO", "Exodus", "EX", "EXOD"),
    book!("LEV", "Leviticus", "LV", "LE"),
    book!("NUM", "Numbers", "NU", "NM"),
    book!("DEU", "Deuteronomy", "DT", "DEUT"),
    book!("JOS", "Joshua", "JOSH"),
    book!("JDG", "Judges", "JUDG", "JG"),
    book!("RUT", "Ruth", "RU", "RTH"),
    book!("1SA", "1 Samuel", "1SAM", "ISAMUEL", "FIRSTSAMUEL"),
    book!("2SA", "2 Samuel", "2SAM", "IISAMUEL", "SECONDSAMUEL"),
    book!("1KI", "1 Kings", "1KGS", "IKINGS", "FIRSTKINGS"),
    book!("2KI", "2 Kings", "2KGS", "IIKINGS", "SECONDKINGS"),
    book!("1CH", "1 Chronicles", "1CHR", "1CHRON", "ICHRONICLES"),
    book!("2CH", "2 Chronicles", "2CHR", "2CHRON", "IICHRONICLES"),
    book!("EZR", "Ezra"),
    book!("NEH", "Nehemiah", "NE"),
    book!("EST", "Esther", "ESTH"),
    book!("JOB", "Job", "JB"),
    book!("PSA", "Psalms", "PSALM", "PS", "PSS"),
    book!("PRO", "Proverbs", "PROV", "PRV", "PR"),
    book!("ECC", "Ecclesiastes", "ECCL", "QOH"),
    book!("SNG", "Song of Songs", "SONGOFSOLOMON", "SONG", "SOS", "CANTICLES"),
    book!("ISA", "Isaiah", "IS"),
    book!("JER", "Jeremiah", "JE", "JR"),
    book!("LAM", "Lamentations", "LA"),
    book!("EZK", "Ezekiel", "EZEK", "EZE"),
    book!("DAN", "Daniel", "DA", "DN"),
    book!("HOS", "Hosea", "HO"),
    book!("JOL", "Joel", "JL", "JOE"),
    book!("AMO", "Amos", "AM"),
    book!("OBA", "Obadiah", "OBAD", "OB"),
    book!("JON", "Jonah", "JNH"),
    book!("MIC", "Micah", "MC"),
    book!("NAM", "Nahum", "NAH", "NA"),
    book!("HAB", "Habakkuk", "HB"),
    book!("ZEP", "Zephaniah", "ZEPH", "ZP"),
    book!("HAG", "Haggai", "HG"),
    book!("ZEC", "Zechariah", "ZECH", "ZC"),
    book!("MAL", "Malachi", "ML"),
    book!("MAT", "Matthew", "MATT", "MT"),
    book!("MRK", "Mark", "MAR", "MK", "MR"),
    book!("LUK", "Luke", "LK", "LU"),
    book!("JHN", "John", "JN", "JOHN", "JOH"),
    book!("ACT", "Acts", "AC"),
    book!("ROM", "Romans", "RO", "RM"),
    book!("1CO", "1 Corinthians", "1COR", "ICORINTHIANS", "FIRSTCORINTHIANS"),
    book!("2CO", "2 Corinthians", "2COR", "IICORINTHIANS", "SECONDCORINTHIANS"),
    book!("GAL", "Galatians", "GA"),
    book!("EPH", "Ephesians", "EPHES"),
    book!("PHP", "Philippians", "PHIL", "PP"),
    book!("COL", "Colossians", "CO"),
    book!("1TH", "1 Thessalonians", "1THESS", "1THES", "ITHESSALONIANS"),
    book!("2TH", "2 Thessalonians", "2THESS", "2THES", "IITHESSALONIANS"),
    book!("1TI", "1 Timothy", "1TIM", "ITIMOTHY", "FIRSTTIMOTHY"),
    book!("2TI", "2 Timothy", "2TIM", "IITIMOTHY", "SECONDTIMOTHY"),
    book!("TIT", "Titus", "TI"),
    book!("PHM", "Philemon", "PHILEM", "PHLM"),
    book!("HEB", "Hebrews"),
    book!("JAS", "James", "JAM", "JM"),
    book!("1PE", "1 Peter", "1PET", "1PT", "IPETER", "FIRSTPETER"),
    book!("2PE", "2 Peter", "2PET", "2PT", "IIPETER", "SECONDPETER"),
    book!("1JN", "1 John", "1JOHN", "1JHN", "IJOHN", "FIRSTJOHN"),
    book!("2JN", "2 John", "2JOHN", "2JHN", "IIJOHN", "SECONDJOHN"),
    book!("3JN", "3 John", "3JOHN", "3JHN", "IIIJOHN", "THIRDJOHN"),
    book!("JUD", "Jude", "JDE"),
    book!("REV", "Revelation", "RE", "RV", "APOCALYPSE", "REVELATIONS"),
];

/// Upper-case with whitespace and dots removed, so `"1 Jn."` becomes `"1JN"`.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Looks a book up by USFM code, name or alias, ignoring case and spacing.
#[must_use]
pub fn find_book(raw: &str) -> Option<&'static Book> {
    let key = normalize(raw);
    if key.is_empty() {
        return None;
    }

    BOOKS.iter().find(|book| {
        book.usfm == key
            || normalize(book.name) == key
            || book.aliases.iter().any(|alias| *alias == key)
    })
}

/// Resolves a book, passing unknown names through for the upstream to judge.
///
/// An unknown book's code keeps only ASCII letters and digits, so it is always a
/// plain path segment.
#[must_use]
pub fn resolve_book(raw: &str) -> BookRef {
    find_book(raw).map_or_else(
        || {
            let name = raw.trim().to_uppercase();
            let usfm = name.chars().filter(char::is_ascii_alphanumeric).collect();
            BookRef { usfm, name }
        },
        BookRef::from,
    )
}
