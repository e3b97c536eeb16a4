//! Pre-authored display strings, one table per language.
//!
//! Every key in `ENGLISH` must appear in every other table (checked by
//! `CatalogValidator` in tests). Placeholders such as `{title}` are filled in
//! by `TranslationCatalog::format` and must survive translation verbatim.

pub type StringTable = &'static [(&'static str, &'static str)];

// ==================== English Strings ====================

/// English language strings (canonical)
pub const ENGLISH: StringTable = &[
    // App chrome
    ("app.title", "VoiceForAll"),
    ("app.tagline", "Voice-Based Information for Everyone"),
    ("app.loading", "Loading VoiceForAll..."),
    ("language.select", "Select Language"),
    ("language.changed", "Language changed to {language}"),
    ("nav.back", "Back"),
    // Narration affordances
    ("narration.listen", "Tap to listen"),
    ("narration.speaking", "Speaking..."),
    ("narration.now_playing", "Now playing: {title}"),
    // Sections
    ("farming.title", "Farming"),
    ("farming.description", "Agricultural tips & info"),
    ("health.title", "Health"),
    ("health.description", "Health & wellness advice"),
    ("government.title", "Government"),
    ("government.description", "Schemes & public services"),
    ("education.title", "Education"),
    ("education.description", "Learning & skill development"),
    // Farming topics
    ("farming.crops.title", "Crop Cultivation"),
    ("farming.crops.description", "Best practices for growing crops"),
    ("farming.pests.title", "Pest Control"),
    ("farming.pests.description", "Organic pest management techniques"),
    ("farming.irrigation.title", "Irrigation"),
    ("farming.irrigation.description", "Water management and irrigation tips"),
    ("farming.fertilizers.title", "Fertilizers"),
    ("farming.fertilizers.description", "Choosing the right fertilizers"),
    ("farming.market.title", "Market Prices"),
    ("farming.market.description", "Current market rates and trends"),
    ("farming.weather.title", "Weather Updates"),
    ("farming.weather.description", "Weather forecasts for farming"),
    // Health topics
    ("health.diseases.title", "Common Diseases"),
    ("health.diseases.description", "Symptoms and prevention of common illnesses"),
    ("health.first_aid.title", "First Aid"),
    ("health.first_aid.description", "Basic first aid for emergencies"),
    ("health.nutrition.title", "Nutrition"),
    ("health.nutrition.description", "Healthy eating for the whole family"),
    ("health.mental.title", "Mental Health"),
    ("health.mental.description", "Managing stress and staying well"),
    ("health.vaccination.title", "Vaccination"),
    ("health.vaccination.description", "Vaccine schedules for children and adults"),
    ("health.hygiene.title", "Hygiene"),
    ("health.hygiene.description", "Clean water, handwashing and sanitation"),
];

// ==================== Hindi Strings ====================

pub const HINDI: StringTable = &[
    ("app.title", "सभी के लिए आवाज़"),
    ("app.tagline", "सभी के लिए आवाज़-आधारित जानकारी"),
    ("app.loading", "लोड हो रहा है..."),
    ("language.select", "भाषा चुनें"),
    ("language.changed", "भाषा बदलकर {language} कर दी गई"),
    ("nav.back", "वापस"),
    ("narration.listen", "सुनने के लिए टैप करें"),
    ("narration.speaking", "बोल रहा है..."),
    ("narration.now_playing", "अभी चल रहा है: {title}"),
    ("farming.title", "खेती"),
    ("farming.description", "कृषि सुझाव और जानकारी"),
    ("health.title", "स्वास्थ्य"),
    ("health.description", "स्वास्थ्य और कल्याण सलाह"),
    ("government.title", "सरकार"),
    ("government.description", "योजनाएँ और सार्वजनिक सेवाएँ"),
    ("education.title", "शिक्षा"),
    ("education.description", "सीखना और कौशल विकास"),
    ("farming.crops.title", "फसल की खेती"),
    ("farming.crops.description", "फसल उगाने के सर्वोत्तम तरीके"),
    ("farming.pests.title", "कीट नियंत्रण"),
    ("farming.pests.description", "जैविक कीट प्रबंधन तकनीकें"),
    ("farming.irrigation.title", "सिंचाई"),
    ("farming.irrigation.description", "जल प्रबंधन और सिंचाई के सुझाव"),
    ("farming.fertilizers.title", "उर्वरक"),
    ("farming.fertilizers.description", "सही उर्वरक का चुनाव"),
    ("farming.market.title", "बाज़ार भाव"),
    ("farming.market.description", "वर्तमान बाज़ार दरें और रुझान"),
    ("farming.weather.title", "मौसम की जानकारी"),
    ("farming.weather.description", "खेती के लिए मौसम पूर्वानुमान"),
    ("health.diseases.title", "सामान्य रोग"),
    ("health.diseases.description", "सामान्य बीमारियों के लक्षण और बचाव"),
    ("health.first_aid.title", "प्राथमिक चिकित्सा"),
    ("health.first_aid.description", "आपात स्थिति में बुनियादी प्राथमिक चिकित्सा"),
    ("health.nutrition.title", "पोषण"),
    ("health.nutrition.description", "पूरे परिवार के लिए स्वस्थ भोजन"),
    ("health.mental.title", "मानसिक स्वास्थ्य"),
    ("health.mental.description", "तनाव का प्रबंधन और स्वस्थ रहना"),
    ("health.vaccination.title", "टीकाकरण"),
    ("health.vaccination.description", "बच्चों और वयस्कों के लिए टीका सारणी"),
    ("health.hygiene.title", "स्वच्छता"),
    ("health.hygiene.description", "साफ़ पानी, हाथ धोना और सफ़ाई"),
];

// ==================== Malayalam Strings ====================

pub const MALAYALAM: StringTable = &[
    ("app.title", "എല്ലാവർക്കും ശബ്ദം"),
    ("app.tagline", "എല്ലാവർക്കും ശബ്ദാധിഷ്ഠിത വിവരങ്ങൾ"),
    ("app.loading", "ലോഡ് ചെയ്യുന്നു..."),
    ("language.select", "ഭാഷ തിരഞ്ഞെടുക്കുക"),
    ("language.changed", "ഭാഷ {language} ആയി മാറ്റി"),
    ("nav.back", "തിരികെ"),
    ("narration.listen", "കേൾക്കാൻ ടാപ്പ് ചെയ്യുക"),
    ("narration.speaking", "സംസാരിക്കുന്നു..."),
    ("narration.now_playing", "ഇപ്പോൾ കേൾക്കുന്നത്: {title}"),
    ("farming.title", "കൃഷി"),
    ("farming.description", "കാർഷിക നിർദ്ദേശങ്ങളും വിവരങ്ങളും"),
    ("health.title", "ആരോഗ്യം"),
    ("health.description", "ആരോഗ്യ, ക്ഷേമ ഉപദേശങ്ങൾ"),
    ("government.title", "സർക്കാർ"),
    ("government.description", "പദ്ധതികളും പൊതു സേവനങ്ങളും"),
    ("education.title", "വിദ്യാഭ്യാസം"),
    ("education.description", "പഠനവും നൈപുണ്യ വികസനവും"),
    ("farming.crops.title", "വിള കൃഷി"),
    ("farming.crops.description", "വിളകൾ വളർത്താനുള്ള മികച്ച രീതികൾ"),
    ("farming.pests.title", "കീട നിയന്ത്രണം"),
    ("farming.pests.description", "ജൈവ കീട നിയന്ത്രണ മാർഗങ്ങൾ"),
    ("farming.irrigation.title", "ജലസേചനം"),
    ("farming.irrigation.description", "ജല പരിപാലനവും ജലസേചന നിർദ്ദേശങ്ങളും"),
    ("farming.fertilizers.title", "വളങ്ങൾ"),
    ("farming.fertilizers.description", "ശരിയായ വളം തിരഞ്ഞെടുക്കൽ"),
    ("farming.market.title", "വിപണി വില"),
    ("farming.market.description", "നിലവിലെ വിപണി നിരക്കുകളും പ്രവണതകളും"),
    ("farming.weather.title", "കാലാവസ്ഥാ വിവരങ്ങൾ"),
    ("farming.weather.description", "കൃഷിക്കുള്ള കാലാവസ്ഥാ പ്രവചനം"),
    ("health.diseases.title", "സാധാരണ രോഗങ്ങൾ"),
    ("health.diseases.description", "സാധാരണ രോഗങ്ങളുടെ ലക്ഷണങ്ങളും പ്രതിരോധവും"),
    ("health.first_aid.title", "പ്രഥമ ശുശ്രൂഷ"),
    ("health.first_aid.description", "അടിയന്തര ഘട്ടങ്ങളിലെ അടിസ്ഥാന പ്രഥമ ശുശ്രൂഷ"),
    ("health.nutrition.title", "പോഷകാഹാരം"),
    ("health.nutrition.description", "കുടുംബത്തിനാകെ ആരോഗ്യകരമായ ഭക്ഷണം"),
    ("health.mental.title", "മാനസികാരോഗ്യം"),
    ("health.mental.description", "സമ്മർദ്ദം നിയന്ത്രിച്ച് ആരോഗ്യത്തോടെ ഇരിക്കുക"),
    ("health.vaccination.title", "പ്രതിരോധ കുത്തിവയ്പ്പ്"),
    ("health.vaccination.description", "കുട്ടികൾക്കും മുതിർന്നവർക്കുമുള്ള വാക്സിൻ പട്ടിക"),
    ("health.hygiene.title", "ശുചിത്വം"),
    ("health.hygiene.description", "ശുദ്ധജലം, കൈ കഴുകൽ, ശുചീകരണം"),
];

// ==================== Marathi Strings ====================

pub const MARATHI: StringTable = &[
    ("app.title", "सर्वांसाठी आवाज"),
    ("app.tagline", "सर्वांसाठी आवाज-आधारित माहिती"),
    ("app.loading", "लोड होत आहे..."),
    ("language.select", "भाषा निवडा"),
    ("language.changed", "भाषा {language} मध्ये बदलली"),
    ("nav.back", "मागे"),
    ("narration.listen", "ऐकण्यासाठी टॅप करा"),
    ("narration.speaking", "बोलत आहे..."),
    ("narration.now_playing", "आता ऐकत आहात: {title}"),
    ("farming.title", "शेती"),
    ("farming.description", "कृषी सल्ला आणि माहिती"),
    ("health.title", "आरोग्य"),
    ("health.description", "आरोग्य आणि निरोगीपणा सल्ला"),
    ("government.title", "सरकार"),
    ("government.description", "योजना आणि सार्वजनिक सेवा"),
    ("education.title", "शिक्षण"),
    ("education.description", "शिकणे आणि कौशल्य विकास"),
    ("farming.crops.title", "पीक लागवड"),
    ("farming.crops.description", "पिके वाढवण्याच्या उत्तम पद्धती"),
    ("farming.pests.title", "कीड नियंत्रण"),
    ("farming.pests.description", "सेंद्रिय कीड व्यवस्थापन तंत्र"),
    ("farming.irrigation.title", "सिंचन"),
    ("farming.irrigation.description", "पाणी व्यवस्थापन आणि सिंचन सल्ला"),
    ("farming.fertilizers.title", "खते"),
    ("farming.fertilizers.description", "योग्य खतांची निवड"),
    ("farming.market.title", "बाजारभाव"),
    ("farming.market.description", "सध्याचे बाजार दर आणि कल"),
    ("farming.weather.title", "हवामान माहिती"),
    ("farming.weather.description", "शेतीसाठी हवामान अंदाज"),
    ("health.diseases.title", "सामान्य आजार"),
    ("health.diseases.description", "सामान्य आजारांची लक्षणे आणि प्रतिबंध"),
    ("health.first_aid.title", "प्रथमोपचार"),
    ("health.first_aid.description", "आपत्कालीन परिस्थितीत मूलभूत प्रथमोपचार"),
    ("health.nutrition.title", "पोषण"),
    ("health.nutrition.description", "संपूर्ण कुटुंबासाठी आरोग्यदायी आहार"),
    ("health.mental.title", "मानसिक आरोग्य"),
    ("health.mental.description", "ताण व्यवस्थापन आणि निरोगी राहणे"),
    ("health.vaccination.title", "लसीकरण"),
    ("health.vaccination.description", "मुले आणि प्रौढांसाठी लसीकरण वेळापत्रक"),
    ("health.hygiene.title", "स्वच्छता"),
    ("health.hygiene.description", "स्वच्छ पाणी, हात धुणे आणि स्वच्छता"),
];

// ==================== Tamil Strings ====================

pub const TAMIL: StringTable = &[
    ("app.title", "அனைவருக்கும் குரல்"),
    ("app.tagline", "அனைவருக்கும் குரல் வழி தகவல்"),
    ("app.loading", "ஏற்றுகிறது..."),
    ("language.select", "மொழியைத் தேர்ந்தெடுக்கவும்"),
    ("language.changed", "மொழி {language} ஆக மாற்றப்பட்டது"),
    ("nav.back", "பின்செல்"),
    ("narration.listen", "கேட்க தட்டவும்"),
    ("narration.speaking", "பேசுகிறது..."),
    ("narration.now_playing", "இப்போது ஒலிப்பது: {title}"),
    ("farming.title", "விவசாயம்"),
    ("farming.description", "வேளாண் குறிப்புகள் மற்றும் தகவல்"),
    ("health.title", "சுகாதாரம்"),
    ("health.description", "உடல்நலம் மற்றும் நல்வாழ்வு ஆலோசனை"),
    ("government.title", "அரசு"),
    ("government.description", "திட்டங்கள் மற்றும் பொது சேவைகள்"),
    ("education.title", "கல்வி"),
    ("education.description", "கற்றல் மற்றும் திறன் மேம்பாடு"),
    ("farming.crops.title", "பயிர் சாகுபடி"),
    ("farming.crops.description", "பயிர் வளர்ப்பதற்கான சிறந்த முறைகள்"),
    ("farming.pests.title", "பூச்சி கட்டுப்பாடு"),
    ("farming.pests.description", "இயற்கை பூச்சி மேலாண்மை முறைகள்"),
    ("farming.irrigation.title", "நீர்ப்பாசனம்"),
    ("farming.irrigation.description", "நீர் மேலாண்மை மற்றும் பாசன குறிப்புகள்"),
    ("farming.fertilizers.title", "உரங்கள்"),
    ("farming.fertilizers.description", "சரியான உரத்தைத் தேர்ந்தெடுத்தல்"),
    ("farming.market.title", "சந்தை விலைகள்"),
    ("farming.market.description", "தற்போதைய சந்தை விலைகள் மற்றும் போக்குகள்"),
    ("farming.weather.title", "வானிலை தகவல்"),
    ("farming.weather.description", "விவசாயத்திற்கான வானிலை முன்னறிவிப்பு"),
    ("health.diseases.title", "பொதுவான நோய்கள்"),
    ("health.diseases.description", "பொதுவான நோய்களின் அறிகுறிகள் மற்றும் தடுப்பு"),
    ("health.first_aid.title", "முதலுதவி"),
    ("health.first_aid.description", "அவசர நிலைகளுக்கான அடிப்படை முதலுதவி"),
    ("health.nutrition.title", "ஊட்டச்சத்து"),
    ("health.nutrition.description", "முழு குடும்பத்திற்கும் ஆரோக்கியமான உணவு"),
    ("health.mental.title", "மனநலம்"),
    ("health.mental.description", "மன அழுத்தத்தை நிர்வகித்து நலமாக இருத்தல்"),
    ("health.vaccination.title", "தடுப்பூசி"),
    ("health.vaccination.description", "குழந்தைகள் மற்றும் பெரியவர்களுக்கான தடுப்பூசி அட்டவணை"),
    ("health.hygiene.title", "சுகாதாரப் பழக்கம்"),
    ("health.hygiene.description", "சுத்தமான நீர், கை கழுவுதல் மற்றும் துப்புரவு"),
];

// ==================== Telugu Strings ====================

pub const TELUGU: StringTable = &[
    ("app.title", "అందరికీ గొంతు"),
    ("app.tagline", "అందరికీ వాయిస్ ఆధారిత సమాచారం"),
    ("app.loading", "లోడ్ అవుతోంది..."),
    ("language.select", "భాషను ఎంచుకోండి"),
    ("language.changed", "భాష {language} కి మార్చబడింది"),
    ("nav.back", "వెనుకకు"),
    ("narration.listen", "వినడానికి నొక్కండి"),
    ("narration.speaking", "మాట్లాడుతోంది..."),
    ("narration.now_playing", "ఇప్పుడు వినిపిస్తోంది: {title}"),
    ("farming.title", "వ్యవసాయం"),
    ("farming.description", "వ్యవసాయ సూచనలు మరియు సమాచారం"),
    ("health.title", "ఆరోగ్యం"),
    ("health.description", "ఆరోగ్యం మరియు శ్రేయస్సు సలహాలు"),
    ("government.title", "ప్రభుత్వం"),
    ("government.description", "పథకాలు మరియు ప్రజా సేవలు"),
    ("education.title", "విద్య"),
    ("education.description", "అభ్యాసం మరియు నైపుణ్యాభివృద్ధి"),
    ("farming.crops.title", "పంట సాగు"),
    ("farming.crops.description", "పంటలు పండించడానికి ఉత్తమ పద్ధతులు"),
    ("farming.pests.title", "పురుగుల నియంత్రణ"),
    ("farming.pests.description", "సేంద్రీయ పురుగుల నిర్వహణ పద్ధతులు"),
    ("farming.irrigation.title", "నీటిపారుదల"),
    ("farming.irrigation.description", "నీటి నిర్వహణ మరియు నీటిపారుదల సూచనలు"),
    ("farming.fertilizers.title", "ఎరువులు"),
    ("farming.fertilizers.description", "సరైన ఎరువుల ఎంపిక"),
    ("farming.market.title", "మార్కెట్ ధరలు"),
    ("farming.market.description", "ప్రస్తుత మార్కెట్ ధరలు మరియు ధోరణులు"),
    ("farming.weather.title", "వాతావరణ సమాచారం"),
    ("farming.weather.description", "వ్యవసాయానికి వాతావరణ సూచనలు"),
    ("health.diseases.title", "సాధారణ వ్యాధులు"),
    ("health.diseases.description", "సాధారణ వ్యాధుల లక్షణాలు మరియు నివారణ"),
    ("health.first_aid.title", "ప్రథమ చికిత్స"),
    ("health.first_aid.description", "అత్యవసర పరిస్థితుల్లో ప్రాథమిక ప్రథమ చికిత్స"),
    ("health.nutrition.title", "పోషణ"),
    ("health.nutrition.description", "కుటుంబం మొత్తానికి ఆరోగ్యకరమైన ఆహారం"),
    ("health.mental.title", "మానసిక ఆరోగ్యం"),
    ("health.mental.description", "ఒత్తిడిని నిర్వహించి ఆరోగ్యంగా ఉండటం"),
    ("health.vaccination.title", "టీకాలు"),
    ("health.vaccination.description", "పిల్లలు మరియు పెద్దలకు టీకా షెడ్యూల్"),
    ("health.hygiene.title", "పరిశుభ్రత"),
    ("health.hygiene.description", "శుభ్రమైన నీరు, చేతులు కడుక్కోవడం మరియు పారిశుధ్యం"),
];

// ==================== Bengali Strings ====================

pub const BENGALI: StringTable = &[
    ("app.title", "সবার জন্য কণ্ঠ"),
    ("app.tagline", "সবার জন্য কণ্ঠ-ভিত্তিক তথ্য"),
    ("app.loading", "লোড হচ্ছে..."),
    ("language.select", "ভাষা নির্বাচন করুন"),
    ("language.changed", "ভাষা পরিবর্তন করে {language} করা হয়েছে"),
    ("nav.back", "ফিরে যান"),
    ("narration.listen", "শুনতে ট্যাপ করুন"),
    ("narration.speaking", "বলছে..."),
    ("narration.now_playing", "এখন চলছে: {title}"),
    ("farming.title", "কৃষি"),
    ("farming.description", "কৃষি পরামর্শ ও তথ্য"),
    ("health.title", "স্বাস্থ্য"),
    ("health.description", "স্বাস্থ্য ও সুস্থতার পরামর্শ"),
    ("government.title", "সরকার"),
    ("government.description", "প্রকল্প ও জনসেবা"),
    ("education.title", "শিক্ষা"),
    ("education.description", "শিক্ষা ও দক্ষতা উন্নয়ন"),
    ("farming.crops.title", "ফসল চাষ"),
    ("farming.crops.description", "ফসল ফলানোর সেরা পদ্ধতি"),
    ("farming.pests.title", "কীটপতঙ্গ নিয়ন্ত্রণ"),
    ("farming.pests.description", "জৈব কীটপতঙ্গ ব্যবস্থাপনার কৌশল"),
    ("farming.irrigation.title", "সেচ"),
    ("farming.irrigation.description", "জল ব্যবস্থাপনা ও সেচের পরামর্শ"),
    ("farming.fertilizers.title", "সার"),
    ("farming.fertilizers.description", "সঠিক সার বেছে নেওয়া"),
    ("farming.market.title", "বাজার দর"),
    ("farming.market.description", "বর্তমান বাজার দর ও প্রবণতা"),
    ("farming.weather.title", "আবহাওয়ার খবর"),
    ("farming.weather.description", "চাষের জন্য আবহাওয়ার পূর্বাভাস"),
    ("health.diseases.title", "সাধারণ রোগ"),
    ("health.diseases.description", "সাধারণ অসুখের লক্ষণ ও প্রতিরোধ"),
    ("health.first_aid.title", "প্রাথমিক চিকিৎসা"),
    ("health.first_aid.description", "জরুরি অবস্থায় মৌলিক প্রাথমিক চিকিৎসা"),
    ("health.nutrition.title", "পুষ্টি"),
    ("health.nutrition.description", "পুরো পরিবারের জন্য স্বাস্থ্যকর খাবার"),
    ("health.mental.title", "মানসিক স্বাস্থ্য"),
    ("health.mental.description", "মানসিক চাপ সামলে ভালো থাকা"),
    ("health.vaccination.title", "টিকাকরণ"),
    ("health.vaccination.description", "শিশু ও প্রাপ্তবয়স্কদের টিকার সময়সূচি"),
    ("health.hygiene.title", "পরিচ্ছন্নতা"),
    ("health.hygiene.description", "পরিষ্কার জল, হাত ধোয়া ও স্যানিটেশন"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_tables() -> [(&'static str, StringTable); 7] {
        [
            ("english", ENGLISH),
            ("hindi", HINDI),
            ("malayalam", MALAYALAM),
            ("marathi", MARATHI),
            ("tamil", TAMIL),
            ("telugu", TELUGU),
            ("bengali", BENGALI),
        ]
    }

    #[test]
    fn test_tables_have_same_length() {
        for (name, table) in all_tables() {
            assert_eq!(table.len(), ENGLISH.len(), "{} table length differs", name);
        }
    }

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for (name, table) in all_tables() {
            let keys: HashSet<_> = table.iter().map(|(key, _)| *key).collect();
            assert_eq!(keys.len(), table.len(), "{} table has duplicate keys", name);
        }
    }

    #[test]
    fn test_no_empty_values() {
        for (name, table) in all_tables() {
            for (key, value) in table.iter() {
                assert!(!value.trim().is_empty(), "{}:{} is empty", name, key);
            }
        }
    }

    #[test]
    fn test_example_key_present() {
        assert!(ENGLISH.iter().any(|(key, _)| *key == "farming.title"));
    }

    #[test]
    fn test_placeholders_present() {
        for (name, table) in all_tables() {
            let now_playing = table
                .iter()
                .find(|(key, _)| *key == "narration.now_playing")
                .map(|(_, value)| *value)
                .unwrap_or_else(|| panic!("{} is missing narration.now_playing", name));
            assert!(now_playing.contains("{title}"), "{} lost placeholder", name);
        }
    }
}
