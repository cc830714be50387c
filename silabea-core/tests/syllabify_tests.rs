//! Syllabification behavior tests

use silabea_core::{Config, ExceptionLevel, Syllabifier};

fn syllables(word: &str) -> Vec<String> {
    silabea_core::syllabify(word).unwrap()
}

fn syllables_with(word: &str, config: Config) -> Vec<String> {
    Syllabifier::with_config(config).unwrap().syllabify(word).unwrap()
}

#[test]
fn open_cv_words() {
    assert_eq!(syllables("casa"), vec!["ca", "sa"]);
    assert_eq!(syllables("ventana"), vec!["ven", "ta", "na"]);
    assert_eq!(syllables("pelota"), vec!["pe", "lo", "ta"]);
}

#[test]
fn single_syllable_words() {
    assert_eq!(syllables("sol"), vec!["sol"]);
    assert_eq!(syllables("buey"), vec!["buey"]);
    assert_eq!(syllables("hoy"), vec!["hoy"]);
}

#[test]
fn indivisible_onsets_stay_whole() {
    assert_eq!(syllables("tractor"), vec!["trac", "tor"]);
    assert_eq!(syllables("hablar"), vec!["ha", "blar"]);
    assert_eq!(syllables("ofrecer"), vec!["o", "fre", "cer"]);
    assert_eq!(syllables("londres"), vec!["lon", "dres"]);
}

#[test]
fn digraphs_are_atomic() {
    assert_eq!(syllables("carro"), vec!["ca", "rro"]);
    assert_eq!(syllables("calle"), vec!["ca", "lle"]);
    assert_eq!(syllables("muchacho"), vec!["mu", "cha", "cho"]);
}

#[test]
fn diphthongs_stay_in_one_nucleus() {
    assert_eq!(syllables("bueno"), vec!["bue", "no"]);
    assert_eq!(syllables("bailar"), vec!["bai", "lar"]);
    assert_eq!(syllables("ciudad"), vec!["ciu", "dad"]);
    assert_eq!(syllables("guerra"), vec!["gue", "rra"]);
}

#[test]
fn triphthongs_stay_in_one_nucleus() {
    assert_eq!(syllables("estudiáis"), vec!["es", "tu", "diáis"]);
}

#[test]
fn strong_vowel_pairs_are_hiatuses() {
    assert_eq!(syllables("leer"), vec!["le", "er"]);
    assert_eq!(syllables("ahora"), vec!["a", "ho", "ra"]);
}

#[test]
fn accented_weak_vowels_break_the_diphthong() {
    assert_eq!(syllables("día"), vec!["dí", "a"]);
    assert_eq!(syllables("país"), vec!["pa", "ís"]);
    assert_eq!(syllables("baúl"), vec!["ba", "úl"]);
    assert_eq!(syllables("veíamos"), vec!["ve", "í", "a", "mos"]);
}

#[test]
fn diaeresis_keeps_the_nucleus_together() {
    assert_eq!(syllables("desagüe"), vec!["de", "sa", "güe"]);
}

#[test]
fn coda_clusters_close_the_previous_syllable() {
    assert_eq!(syllables("instante"), vec!["ins", "tan", "te"]);
    assert_eq!(syllables("transporte"), vec!["trans", "por", "te"]);
    assert_eq!(syllables("abstracto"), vec!["abs", "trac", "to"]);
}

#[test]
fn sonority_tie_breaks() {
    assert_eq!(syllables("pacto"), vec!["pac", "to"]);
    assert_eq!(syllables("acción"), vec!["ac", "ción"]);
    assert_eq!(syllables("examen"), vec!["e", "xa", "men"]);
}

#[test]
fn uir_exception_forces_the_hiatus() {
    assert_eq!(syllables("construir"), vec!["cons", "tru", "ir"]);
    assert_eq!(syllables("obstruir"), vec!["obs", "tru", "ir"]);
    assert_eq!(syllables("destruido"), vec!["des", "tru", "i", "do"]);
}

#[test]
fn uir_exception_spares_glide_stems() {
    // gu/qu keep the glide: no hiatus
    assert_eq!(syllables("seguir"), vec!["se", "guir"]);
    assert_eq!(syllables("delinquir"), vec!["de", "lin", "quir"]);
}

#[test]
fn uar_exception_forces_the_hiatus() {
    assert_eq!(syllables("actuar"), vec!["ac", "tu", "ar"]);
    assert_eq!(syllables("continuamos"), vec!["con", "ti", "nu", "a", "mos"]);
}

#[test]
fn uar_exception_spares_g_and_c_stems() {
    assert_eq!(syllables("averiguar"), vec!["a", "ve", "ri", "guar"]);
    assert_eq!(syllables("evacuar"), vec!["e", "va", "cuar"]);
}

#[test]
fn exceptions_can_be_disabled() {
    let config = Config::builder()
        .exception_level(ExceptionLevel::None)
        .build();
    // without the rule, "ui" merges into a diphthong
    assert_eq!(syllables_with("construir", config), vec!["cons", "truir"]);
}

#[test]
fn extended_level_splits_vacillating_hiatus_words() {
    let extended = Config::builder()
        .exception_level(ExceptionLevel::Extended)
        .build();
    assert_eq!(
        syllables_with("cliente", extended),
        vec!["cli", "en", "te"]
    );

    // at the basic level the default diphthong stands
    assert_eq!(syllables("cliente"), vec!["clien", "te"]);
}

#[test]
fn silent_h_is_transparent_to_diphthongs() {
    assert_eq!(syllables("ahumado"), vec!["ahu", "ma", "do"]);
    assert_eq!(syllables("prohibir"), vec!["prohi", "bir"]);
}

#[test]
fn h_as_consonant_blocks_the_nucleus() {
    let config = Config::builder().treat_h_as_consonant(true).build();
    assert_eq!(
        syllables_with("prohibir", config),
        vec!["pro", "hi", "bir"]
    );
}

#[test]
fn epenthesis_inserts_the_prosthetic_syllable() {
    let config = Config::builder().apply_epenthesis(true).build();
    assert_eq!(syllables_with("stress", config.clone()), vec!["es", "tress"]);
    assert_eq!(
        syllables_with("scanner", config),
        vec!["es", "can", "ner"]
    );
}

#[test]
fn tl_onset_is_admitted_on_request() {
    assert_eq!(syllables("atleta"), vec!["at", "le", "ta"]);
    let config = Config::builder().allow_tl_onset(true).build();
    assert_eq!(syllables_with("atleta", config), vec!["a", "tle", "ta"]);
}

#[test]
fn ipa_mode_uses_ipa_vowel_classes() {
    let config = Config::builder().ipa(true).build();
    assert_eq!(syllables_with("sjesta", config.clone()), vec!["sjes", "ta"]);
    assert_eq!(syllables_with("gwapo", config), vec!["gwa", "po"]);
}

#[test]
fn letter_spelling_is_opt_in() {
    assert_eq!(syllables("b"), vec!["b"]);
    let config = Config::builder().spell_single_letters(true).build();
    assert_eq!(syllables_with("b", config.clone()), vec!["be"]);
    assert_eq!(syllables_with("h", config), vec!["ha", "che"]);
}

#[test]
fn punctuation_and_case_are_normalized() {
    assert_eq!(syllables("¡Casa!"), vec!["Ca", "sa"]);
    assert_eq!(syllables("co-che"), vec!["co", "che"]);
    assert_eq!(syllables("voilà"), vec!["voi", "la"]);
}

#[test]
fn empty_and_letterless_inputs_yield_no_syllables() {
    assert!(syllables("").is_empty());
    assert!(syllables("123!?").is_empty());
}

#[test]
fn latin_words_get_their_implied_accent() {
    assert_eq!(syllables("dominum"), vec!["dó", "min", "um"]);
    assert_eq!(syllables("rosam"), vec!["rós", "am"]);
}
