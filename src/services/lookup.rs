use async_trait::async_trait;
use log::debug;
use crate::models::TranslationResult;
use crate::utils::{contains_any, is_blank};
use super::translator::{TranslateError, Translator};

/// (english phrase, japanese, romaji, syllables), matched in order
const PHRASES: &[(&str, &str, &str, &str)] = &[
    // Greetings
    ("hello", "こんにちは", "konnichiwa", "ko-n-ni-chi-wa"),
    ("good morning", "おはようございます", "ohayou gozaimasu", "o-ha-yo-u go-za-i-ma-su"),
    ("good evening", "こんばんは", "konbanwa", "ko-n-ba-n-wa"),
    ("goodbye", "さようなら", "sayounara", "sa-yo-u-na-ra"),
    ("see you later", "またね", "matane", "ma-ta-ne"),
    // Courtesy
    ("thank you", "ありがとう", "arigatou", "a-ri-ga-to-u"),
    ("you're welcome", "どういたしまして", "dou itashimashite", "do-u i-ta-shi-ma-shi-te"),
    ("excuse me", "すみません", "sumimasen", "su-mi-ma-se-n"),
    ("sorry", "ごめんなさい", "gomen nasai", "go-me-n na-sa-i"),
    ("please", "お願いします", "onegaishimasu", "o-ne-ga-i-shi-ma-su"),
    // Questions
    ("how are you", "お元気ですか", "ogenki desu ka", "o-ge-n-ki de-su ka"),
    ("what is your name", "お名前は何ですか", "onamae wa nan desu ka", "o-na-ma-e wa na-n de-su ka"),
    ("where is", "どこですか", "doko desu ka", "do-ko de-su ka"),
    ("when", "いつですか", "itsu desu ka", "i-tsu de-su ka"),
    ("why", "なぜですか", "naze desu ka", "na-ze de-su ka"),
    // Sentences
    (
        "i am learning japanese",
        "私は日本語を勉強しています",
        "watashi wa nihongo o benkyou shiteimasu",
        "wa-ta-shi wa ni-ho-n-go o be-n-kyo-u shi-te-i-ma-su",
    ),
    (
        "i like japanese food",
        "私は日本食が好きです",
        "watashi wa nihonshoku ga suki desu",
        "wa-ta-shi wa ni-ho-n-sho-ku ga su-ki de-su",
    ),
    (
        "i want to go to japan",
        "私は日本に行きたいです",
        "watashi wa nihon ni ikitai desu",
        "wa-ta-shi wa ni-ho-n ni i-ki-ta-i de-su",
    ),
    ("i don't understand", "わかりません", "wakarimasen", "wa-ka-ri-ma-se-n"),
    ("i understand", "わかります", "wakarimasu", "wa-ka-ri-ma-su"),
    // Food
    ("delicious", "美味しい", "oishii", "o-i-shi-i"),
    ("water", "水", "mizu", "mi-zu"),
    ("restaurant", "レストラン", "resutoran", "re-su-to-ra-n"),
    ("menu", "メニュー", "menyuu", "me-nyu-u"),
    ("check please", "お会計お願いします", "okaikei onegaishimasu", "o-ka-i-ke-i o-ne-ga-i-shi-ma-su"),
];

/// Sentence templates used when no phrase matches: (triggers, japanese, romaji, syllables)
const TEMPLATES: &[(&[&str], &str, &str, &str)] = &[
    (
        &["my name is", "i am called"],
        "私の名前は[名前]です",
        "watashi no namae wa [name] desu",
        "wa-ta-shi no na-ma-e wa [name] de-su",
    ),
    (
        &["love", "like"],
        "私は[対象]が好きです",
        "watashi wa [object] ga suki desu",
        "wa-ta-shi wa [object] ga su-ki de-su",
    ),
    (
        &["want"],
        "私は[対象]が欲しいです",
        "watashi wa [object] ga hoshii desu",
        "wa-ta-shi wa [object] ga ho-shi-i de-su",
    ),
    (
        &["where", "location"],
        "[場所]はどこですか",
        "[place] wa doko desu ka",
        "[place] wa do-ko de-su ka",
    ),
    (
        &["when", "time"],
        "いつ[行動]しますか",
        "itsu [action] shimasu ka",
        "i-tsu [action] shi-ma-su ka",
    ),
    (
        &["how", "way"],
        "どうやって[行動]しますか",
        "douyatte [action] shimasu ka",
        "do-u-ya-tte [action] shi-ma-su ka",
    ),
];

/// Offline translator backed by a fixed phrase table
#[derive(Debug, Default)]
pub struct LookupTranslator;

impl LookupTranslator {
    pub fn new() -> Self {
        LookupTranslator
    }

    pub fn lookup(&self, text: &str) -> TranslationResult {
        let lower = text.to_lowercase();

        if let Some(&(phrase, japanese, romaji, syllables)) =
            PHRASES.iter().find(|(phrase, ..)| lower.contains(phrase))
        {
            debug!("Phrase table hit: {}", phrase);
            return TranslationResult::new(japanese, romaji, syllables);
        }

        if let Some(&(_, japanese, romaji, syllables)) =
            TEMPLATES.iter().find(|(triggers, ..)| contains_any(&lower, triggers))
        {
            return TranslationResult::new(japanese, romaji, syllables);
        }

        TranslationResult::new(
            format!("{} (翻訳例: これは翻訳の例です)", text),
            format!("{} (romaji example: kore wa honyaku no rei desu)", text),
            format!("{} (syllables example: ko-re wa ho-nya-ku no re-i de-su)", text),
        )
    }
}

#[async_trait]
impl Translator for LookupTranslator {
    fn name(&self) -> &'static str {
        "lookup"
    }

    async fn translate(&self, text: &str) -> Result<TranslationResult, TranslateError> {
        if is_blank(text) {
            return Err(TranslateError::EmptyText);
        }
        Ok(self.lookup(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello() {
        let result = LookupTranslator::new().lookup("hello");
        assert_eq!(result, TranslationResult::new("こんにちは", "konnichiwa", "ko-n-ni-chi-wa"));
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let result = LookupTranslator::new().lookup("Thank you very much!");
        assert_eq!(result.romaji, "arigatou");
    }

    #[test]
    fn test_first_phrase_in_table_order_wins() {
        // "hello" precedes "how are you" in the table
        let result = LookupTranslator::new().lookup("Hello, how are you?");
        assert_eq!(result.japanese, "こんにちは");
    }

    #[test]
    fn test_templates() {
        let t = LookupTranslator::new();
        assert_eq!(t.lookup("My name is Ken").japanese, "私の名前は[名前]です");
        assert_eq!(t.lookup("I love cats").japanese, "私は[対象]が好きです");
        assert_eq!(t.lookup("I want a car").japanese, "私は[対象]が欲しいです");
        assert_eq!(t.lookup("what time is it").japanese, "いつ[行動]しますか");
        assert_eq!(t.lookup("show me the way").japanese, "どうやって[行動]しますか");
    }

    #[test]
    fn test_location_template() {
        let t = LookupTranslator::new();
        assert_eq!(t.lookup("Where are you").japanese, "[場所]はどこですか");
        assert_eq!(t.lookup("share your location").romaji, "[place] wa doko desu ka");
        // "where is" is a phrase of its own and beats the template
        assert_eq!(t.lookup("where is the station").japanese, "どこですか");
    }

    #[test]
    fn test_phrase_table_beats_templates() {
        let t = LookupTranslator::new();
        // "when" is in both lists; the phrase entry wins
        assert_eq!(
            t.lookup("when do we leave"),
            TranslationResult::new("いつですか", "itsu desu ka", "i-tsu de-su ka")
        );
    }

    #[test]
    fn test_unknown_text_is_echoed() {
        let result = LookupTranslator::new().lookup("bicycle");
        assert!(result.japanese.starts_with("bicycle ("));
        assert!(result.romaji.starts_with("bicycle ("));
        assert!(result.syllables.unwrap().starts_with("bicycle ("));
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let t = LookupTranslator::new();
        assert!(matches!(t.translate("   ").await, Err(TranslateError::EmptyText)));
        assert!(t.translate("water").await.is_ok());
    }
}
