use cs_core::locale::Language;

type Table = &'static [(&'static str, &'static str)];

pub(super) fn table(language: Language) -> Table {
    match language {
        Language::En => EN,
        Language::Hi => HI,
        Language::Mr => MR,
    }
}

const EN: Table = &[
    ("app.title", "Crop Survey"),
    ("language.select", "Choose language"),
    ("action.next", "Next"),
    ("action.back", "Back"),
    ("action.send_otp", "Send OTP"),
    ("action.verify", "Verify"),
    ("action.resend_otp", "Resend OTP"),
    ("action.validate", "Validate"),
    ("action.register_on_pmfby", "Register on PMFBY portal"),
    ("action.complete_registration", "Complete registration"),
    ("action.capture", "Capture"),
    ("action.retake", "Retake"),
    ("registration.phone.title", "Enter your mobile number"),
    ("registration.phone.placeholder", "10-digit mobile number"),
    ("registration.otp.title", "Verify OTP"),
    ("registration.otp.sent_to", "OTP sent to"),
    ("registration.otp.resend_in", "Resend OTP in {seconds}s"),
    ("registration.pmfby.title", "PMFBY ID"),
    ("registration.pmfby.placeholder", "PMFBY followed by 10 digits"),
    ("registration.pmfby.not_registered", "Not registered on PMFBY yet?"),
    ("registration.profile.name", "Farmer name"),
    ("registration.profile.relative_name", "Father's / husband's name"),
    ("registration.profile.state", "State"),
    ("registration.profile.district", "District"),
    ("registration.profile.village", "Village"),
    ("registration.profile.land_area", "Land area"),
    ("registration.profile.crops", "Crops"),
    ("registration.complete.title", "Registration successful"),
    ("registration.complete.redirecting", "Taking you to the home screen"),
    ("capture.title", "Capture crop photo"),
    ("capture.distance.too_close", "Move back"),
    ("capture.distance.good", "Distance is good"),
    ("capture.distance.too_far", "Move closer"),
    ("capture.light.too_dark", "Too dark"),
    ("capture.light.good", "Light is good"),
    ("capture.light.too_bright", "Too bright"),
    ("capture.subject.detected", "Crop detected"),
    ("capture.subject.not_detected", "Point the camera at the crop"),
    ("capture.auto_capture_in", "Capturing in {seconds}"),
    ("capture.flash.off", "Flash off"),
    ("capture.flash.on", "Flash on"),
    ("capture.flash.auto", "Flash auto"),
    ("crop_stage.sowing", "Sowing"),
    ("crop_stage.vegetative", "Vegetative"),
    ("crop_stage.flowering", "Flowering"),
    ("crop_stage.maturity", "Maturity"),
    ("crop_stage.harvest", "Harvest"),
    ("crop_stage.crop_damage", "Crop damage"),
    ("error.invalid_phone", "Please enter a valid 10-digit mobile number"),
    ("error.invalid_otp_format", "Please enter the 6-digit OTP"),
    ("error.invalid_otp", "Invalid OTP. Please try again"),
    ("error.resend_locked", "You can resend the OTP when the timer ends"),
    ("error.resend_limit", "Maximum OTP resend attempts reached"),
    ("error.invalid_pmfby_id", "Please enter a valid PMFBY ID"),
    ("error.pmfby_not_found", "PMFBY ID not found"),
    ("error.pmfby_not_validated", "Please validate your PMFBY ID first"),
    ("error.try_again", "Something went wrong. Please try again"),
    ("error.capture_failed", "Could not capture the photo. Please try again"),
    ("error.handoff_failed", "Could not open the photo for review. Please try again"),
];

const HI: Table = &[
    ("app.title", "फसल सर्वेक्षण"),
    ("language.select", "भाषा चुनें"),
    ("action.next", "आगे"),
    ("action.back", "पीछे"),
    ("action.send_otp", "ओटीपी भेजें"),
    ("action.verify", "सत्यापित करें"),
    ("action.resend_otp", "ओटीपी दोबारा भेजें"),
    ("action.validate", "जाँचें"),
    ("action.register_on_pmfby", "PMFBY पोर्टल पर पंजीकरण करें"),
    ("action.complete_registration", "पंजीकरण पूरा करें"),
    ("action.capture", "फोटो लें"),
    ("action.retake", "फिर से लें"),
    ("registration.phone.title", "अपना मोबाइल नंबर दर्ज करें"),
    ("registration.phone.placeholder", "10 अंकों का मोबाइल नंबर"),
    ("registration.otp.title", "ओटीपी सत्यापित करें"),
    ("registration.otp.sent_to", "ओटीपी भेजा गया"),
    ("registration.otp.resend_in", "{seconds} सेकंड में दोबारा भेजें"),
    ("registration.pmfby.title", "PMFBY आईडी"),
    ("registration.pmfby.placeholder", "PMFBY के बाद 10 अंक"),
    ("registration.pmfby.not_registered", "PMFBY पर पंजीकृत नहीं हैं?"),
    ("registration.profile.name", "किसान का नाम"),
    ("registration.profile.relative_name", "पिता / पति का नाम"),
    ("registration.profile.state", "राज्य"),
    ("registration.profile.district", "ज़िला"),
    ("registration.profile.village", "गाँव"),
    ("registration.profile.land_area", "भूमि क्षेत्र"),
    ("registration.profile.crops", "फसलें"),
    ("registration.complete.title", "पंजीकरण सफल"),
    ("registration.complete.redirecting", "होम स्क्रीन पर ले जा रहे हैं"),
    ("capture.title", "फसल की फोटो लें"),
    ("capture.distance.too_close", "थोड़ा पीछे हटें"),
    ("capture.distance.good", "दूरी ठीक है"),
    ("capture.distance.too_far", "थोड़ा पास आएँ"),
    ("capture.light.too_dark", "बहुत अंधेरा"),
    ("capture.light.good", "रोशनी ठीक है"),
    ("capture.light.too_bright", "बहुत तेज़ रोशनी"),
    ("capture.subject.detected", "फसल दिख रही है"),
    ("capture.subject.not_detected", "कैमरा फसल की ओर करें"),
    ("capture.auto_capture_in", "{seconds} में फोटो"),
    ("capture.flash.off", "फ्लैश बंद"),
    ("capture.flash.on", "फ्लैश चालू"),
    ("capture.flash.auto", "फ्लैश ऑटो"),
    ("crop_stage.sowing", "बुवाई"),
    ("crop_stage.vegetative", "वानस्पतिक अवस्था"),
    ("crop_stage.flowering", "फूल आना"),
    ("crop_stage.maturity", "परिपक्वता"),
    ("crop_stage.harvest", "कटाई"),
    ("crop_stage.crop_damage", "फसल नुकसान"),
    ("error.invalid_phone", "कृपया सही 10 अंकों का मोबाइल नंबर दर्ज करें"),
    ("error.invalid_otp_format", "कृपया 6 अंकों का ओटीपी दर्ज करें"),
    ("error.invalid_otp", "गलत ओटीपी। कृपया फिर से प्रयास करें"),
    ("error.resend_locked", "टाइमर खत्म होने पर ओटीपी दोबारा भेजें"),
    ("error.resend_limit", "ओटीपी दोबारा भेजने की सीमा पूरी हो गई"),
    ("error.invalid_pmfby_id", "कृपया सही PMFBY आईडी दर्ज करें"),
    ("error.pmfby_not_found", "PMFBY आईडी नहीं मिली"),
    ("error.pmfby_not_validated", "पहले अपनी PMFBY आईडी जाँचें"),
    ("error.try_again", "कुछ गलत हुआ। कृपया फिर से प्रयास करें"),
    ("error.capture_failed", "फोटो नहीं ली जा सकी। कृपया फिर से प्रयास करें"),
    ("error.handoff_failed", "फोटो समीक्षा के लिए नहीं खुल सकी। कृपया फिर से प्रयास करें"),
];

const MR: Table = &[
    ("app.title", "पीक सर्वेक्षण"),
    ("language.select", "भाषा निवडा"),
    ("action.next", "पुढे"),
    ("action.back", "मागे"),
    ("action.send_otp", "ओटीपी पाठवा"),
    ("action.verify", "पडताळा"),
    ("action.resend_otp", "ओटीपी पुन्हा पाठवा"),
    ("action.validate", "तपासा"),
    ("action.register_on_pmfby", "PMFBY पोर्टलवर नोंदणी करा"),
    ("action.complete_registration", "नोंदणी पूर्ण करा"),
    ("action.capture", "फोटो घ्या"),
    ("action.retake", "पुन्हा घ्या"),
    ("registration.phone.title", "तुमचा मोबाईल नंबर टाका"),
    ("registration.phone.placeholder", "10 अंकी मोबाईल नंबर"),
    ("registration.otp.title", "ओटीपी पडताळा"),
    ("registration.otp.sent_to", "ओटीपी पाठवला"),
    ("registration.otp.resend_in", "{seconds} सेकंदात पुन्हा पाठवा"),
    ("registration.pmfby.title", "PMFBY आयडी"),
    ("registration.pmfby.placeholder", "PMFBY नंतर 10 अंक"),
    ("registration.pmfby.not_registered", "PMFBY वर नोंदणी नाही?"),
    ("registration.profile.name", "शेतकऱ्याचे नाव"),
    ("registration.profile.relative_name", "वडील / पतीचे नाव"),
    ("registration.profile.state", "राज्य"),
    ("registration.profile.district", "जिल्हा"),
    ("registration.profile.village", "गाव"),
    ("registration.profile.land_area", "जमीन क्षेत्र"),
    ("registration.profile.crops", "पिके"),
    ("registration.complete.title", "नोंदणी यशस्वी"),
    ("registration.complete.redirecting", "मुख्य स्क्रीनवर नेत आहोत"),
    ("capture.title", "पिकाचा फोटो घ्या"),
    ("capture.distance.too_close", "थोडे मागे व्हा"),
    ("capture.distance.good", "अंतर योग्य आहे"),
    ("capture.distance.too_far", "थोडे जवळ या"),
    ("capture.light.too_dark", "खूप अंधार"),
    ("capture.light.good", "प्रकाश योग्य आहे"),
    ("capture.light.too_bright", "खूप प्रकाश"),
    ("capture.subject.detected", "पीक दिसत आहे"),
    ("capture.subject.not_detected", "कॅमेरा पिकाकडे धरा"),
    ("capture.auto_capture_in", "{seconds} मध्ये फोटो"),
    ("capture.flash.off", "फ्लॅश बंद"),
    ("capture.flash.on", "फ्लॅश चालू"),
    ("capture.flash.auto", "फ्लॅश ऑटो"),
    ("crop_stage.sowing", "पेरणी"),
    ("crop_stage.vegetative", "वाढीची अवस्था"),
    ("crop_stage.flowering", "फुलोरा"),
    ("crop_stage.maturity", "परिपक्वता"),
    ("crop_stage.harvest", "कापणी"),
    ("crop_stage.crop_damage", "पीक नुकसान"),
    ("error.invalid_phone", "कृपया योग्य 10 अंकी मोबाईल नंबर टाका"),
    ("error.invalid_otp_format", "कृपया 6 अंकी ओटीपी टाका"),
    ("error.invalid_otp", "चुकीचा ओटीपी. कृपया पुन्हा प्रयत्न करा"),
    ("error.resend_locked", "टायमर संपल्यावर ओटीपी पुन्हा पाठवा"),
    ("error.resend_limit", "ओटीपी पुन्हा पाठवण्याची मर्यादा संपली"),
    ("error.invalid_pmfby_id", "कृपया योग्य PMFBY आयडी टाका"),
    ("error.pmfby_not_found", "PMFBY आयडी सापडला नाही"),
    ("error.pmfby_not_validated", "आधी तुमचा PMFBY आयडी तपासा"),
    ("error.try_again", "काहीतरी चुकले. कृपया पुन्हा प्रयत्न करा"),
    ("error.capture_failed", "फोटो घेता आला नाही. कृपया पुन्हा प्रयत्न करा"),
    ("error.handoff_failed", "फोटो तपासणीसाठी उघडता आला नाही. कृपया पुन्हा प्रयत्न करा"),
];
