use tts_reader::settings::{decode, encode, OutputType, Settings, SpeakerAge, SpeakerSex, SpeechRate};

#[test]
fn test_round_trip() {
    for settings in Settings::all() {
        assert_eq!(decode(&encode(&settings)), settings, "{}", encode(&settings));
    }
}

#[test]
fn test_encoding_layout() {
    let settings =
        Settings::new(SpeakerAge::Child, SpeakerSex::Male, SpeechRate::Fastest, OutputType::File);
    assert_eq!(
        encode(&settings),
        "speakerAge=SpeakerAge.Child;speakerSex=SpeakerSex.Male;\
         speechRate=SpeechRate.Fastest;outputType=OutputType.File"
    );
}

#[test]
fn test_defaults_for_unreadable_text() {
    assert_eq!(decode(""), Settings::DEFAULT);
    assert_eq!(decode("garbage;;;==="), Settings::DEFAULT);
    assert_eq!(decode("\u{0}\u{ffff}日本語 1234"), Settings::DEFAULT);
    assert_eq!(Settings::default(), Settings::DEFAULT);
}

#[test]
fn test_last_write_wins() {
    let settings = decode("speakerAge=SpeakerAge.Child;speakerAge=SpeakerAge.Senior");
    assert_eq!(settings.speaker_age, SpeakerAge::Senior);

    let settings = decode("speakerAge=SpeakerAge.Child;speakerAge=SpeakerAge.Nonsense");
    assert_eq!(settings.speaker_age, SpeakerAge::Child);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let settings = decode("bogus=Whatever;speechRate=SpeechRate.Fast");
    assert_eq!(
        settings,
        Settings::new(SpeakerAge::Adult, SpeakerSex::Neutral, SpeechRate::Fast, OutputType::AudioDevice)
    );
}

#[test]
fn test_partial_corruption_keeps_readable_fields() {
    let text = "speakerAge=SpeakerAge.Teen;\n\
                speakerSex==SpeakerSex.Female;\n\
                speechRate=SpeechRate.Sloooow;\n\
                outputType=OutputType.File";
    let settings = decode(text);
    assert_eq!(
        settings,
        Settings::new(SpeakerAge::Teen, SpeakerSex::Neutral, SpeechRate::Normal, OutputType::File)
    );
}

#[test]
fn test_noise_characters_are_dropped_before_parsing() {
    let settings = decode("  speech Rate =\tSpeech_Rate.Slow!; output-Type = OutputType.File\r\n");
    assert_eq!(settings.speech_rate, SpeechRate::Slow);
    assert_eq!(settings.output_type, OutputType::File);
}
