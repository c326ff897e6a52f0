//! Documentation content for the cardq CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Text,
    Colors,
    Numbers,
    Mana,
    Formats,
    Names,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "text" | "oracle" | "type" | "types" => Some(Self::Text),
            "colors" | "color" | "identity" => Some(Self::Colors),
            "numbers" | "number" | "stats" | "manavalue" | "cmc" => Some(Self::Numbers),
            "mana" | "cost" => Some(Self::Mana),
            "formats" | "format" | "legality" => Some(Self::Formats),
            "names" | "name" | "exact" => Some(Self::Names),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"CARDQ DOCUMENTATION

cardq searches a collection of cards with a compact query language. A query is
a list of clauses separated by spaces; a card is shown when every clause
matches.

DOCUMENTATION CATEGORIES

  syntax     Clauses, comparators, quoting and regular expressions
  text       Type line, rules text and keyword searches
  colors     Color and color identity comparisons
  numbers    Mana value, power and toughness
  mana       Mana cost symbols
  formats    Format legality, bans and restrictions
  names      Name searches and exact names

QUICK REFERENCE

  goblin               Name contains "goblin"
  !"Lightning Bolt"    Name is exactly "Lightning Bolt"
  t:instant            Type line contains "instant"
  o:"draw a card"      Rules text contains "draw a card"
  o:/deals \d damage/  Rules text matches a regular expression
  c:wu                 Colors are exactly white and blue
  id<=rg               Color identity within red and green
  cmc<=3               Mana value three or less
  f:commander          Legal in Commander

Run 'cardq doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Text) => Ok(TEXT_DOC),
        Some(DocCategory::Colors) => Ok(COLORS_DOC),
        Some(DocCategory::Numbers) => Ok(NUMBERS_DOC),
        Some(DocCategory::Mana) => Ok(MANA_DOC),
        Some(DocCategory::Formats) => Ok(FORMATS_DOC),
        Some(DocCategory::Names) => Ok(NAMES_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Clauses and Values

CLAUSES
  field:value   field=value
    Text fields search for the value, numeric and color fields compare for
    equality.

  field<value   field<=value   field>value   field>=value
    Ordered comparisons, for numbers, colors and mana costs.

  value
    A clause without a field searches card names.

  Clauses are separated by spaces and must all match:
    cmc<=2 o:draw t:instant

FIELD NAMES
  Field names ignore case and have short aliases:

    c       color          id, ci   identity
    t       type           o        oracle
    fo      fulloracle     kw       keyword
    m       mana           mv, cmc  manavalue
    p, pow  power          tou      toughness
    s, e    set            st       set_type
    f       format         legal    format
    n       name           oid      oracle_id

    banned and restricted work like format.

VALUES
  Barewords
    Letters, digits and * . _ '
      t:goblin   cmc:0.5   power=*   urza's

  Quoted text
    Anything between double quotes; \" is a literal quote.
      o:"draw a card"   !"Borborygmos Enraged"

  Regular expressions
    Anything between slashes; \/ is a literal slash. Matching ignores case
    and ^ and $ match at line breaks.
      o:/^flying$/   name:/^a.*s$/

NOT SUPPORTED
  Parentheses, "or" and "-" are not part of the language.
"#;

const TEXT_DOC: &str = r#"TEXT - Type Line, Rules Text and Keywords

TYPE LINE
  t:creature      type line contains "creature"
  t:"legendary creature"
  t:/^artifact/   type line matches a regular expression

RULES TEXT
  o:flying        rules text contains "flying"
  o:/draw (a|two) cards?/

  Reminder text in parentheses is ignored by o:. Use fo: (fulloracle) to
  include it:
    fo:"this land enters tapped"

KEYWORDS
  kw:flying       card has the keyword "flying"
  kw:"first strike"

  Keyword searches compare whole keywords, not substrings.

MULTI-FACED CARDS
  A clause matches when either face matches.

Only : and = are accepted for these fields.
"#;

const COLORS_DOC: &str = r#"COLORS - Colors and Color Identity

VALUES
  Letters     w u b r g, in any combination: c:wu
  Words       white blue black red green: c:green
  Colorless   c or colorless: c:c
  Multicolor  m or multicolor: c:m (more than one color)

COMPARISONS
  c:wu  c=wu    exactly white and blue
  c<wu          fewer colors, all within white and blue
  c<=wu         all colors within white and blue
  c>=wu         at least white and blue
  c>wu          white and blue plus at least one more color

COLOR IDENTITY
  id<=rg        playable in a red-green Commander deck
  ci:c          colorless identity

Printed colors of every face count toward c:. Cards without a color
identity never match id:.
"#;

const NUMBERS_DOC: &str = r#"NUMBERS - Mana Value, Power and Toughness

FIELDS
  mv, cmc, manavalue    mana value
  p, pow, power         power
  tou, toughness        toughness

COMPARISONS
  cmc=3   cmc:3   cmc<3   cmc<=3   cmc>3   cmc>=3
  cmc:0.5
  pow>=4 tou<=2

NON-NUMERIC STATS
  Cards printed with * or X power or toughness never satisfy a numeric
  comparison. power=* and power=X are accepted but match nothing.

  Cards without a value (no power on an instant) never match.
"#;

const MANA_DOC: &str = r#"MANA - Mana Cost Symbols

VALUES
  Compact    m:2rr     two generic and two red
  Braced     m:"{2}{R}{R}"
  Hybrid     m:"{W/U}"

COMPARISONS
  m:rr       cost contains at least two red symbols (same as m>=rr)
  m=2rr      cost is exactly {2}{R}{R}
  m<=2rr     cost fits inside {2}{R}{R}
  m<2rr      fits inside and is not equal
  m>rr       contains and is not equal
"#;

const FORMATS_DOC: &str = r#"FORMATS - Legality

CLAUSES
  f:modern       legal in Modern
  legal:pauper   legal in Pauper
  banned:legacy  banned in Legacy
  restricted:v   restricted in Vintage

FORMAT ALIASES
  s standard     f future        h historic      t timeless
  g gladiator    m modern        l legacy        p pauper
  v vintage      c, edh commander                o oathbreaker
  sb standardbrawl               b brawl         a alchemy
  pedh paupercommander           d duel          os oldschool
  pre premodern

Cards without an entry for the format never match.
"#;

const NAMES_DOC: &str = r#"NAMES - Name Searches

SUBSTRING
  goblin             name contains "goblin"
  "goblin guide"     name contains "goblin guide"
  name:bolt
  name:/^lightning/  name matches a regular expression

EXACT NAME
  !"Lightning Bolt"  name is exactly "Lightning Bolt"
  !shock

  ! applies to the value right after it and compares the whole name,
  ignoring case. Either face of a multi-faced card may match.

DEFAULT FILTER
  Unless --all is given, searches hide Vanguard, Plane, Scheme and
  Phenomenon cards, memorabilia and minigame sets, and the placeholder
  'unk' set.
"#;
