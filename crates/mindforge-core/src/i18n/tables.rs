//! Translation tables, one flat key -> text list per language.

use super::language::Language;

pub(crate) fn table(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::En => EN,
        Language::Da => DA,
        Language::De => DE,
        Language::Lt => LT,
    }
}

pub(crate) fn lookup(language: Language, key: &str) -> Option<&'static str> {
    table(language)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

static EN: &[(&str, &str)] = &[
    ("selectLanguage", "Select Your Language"),
    ("welcomeTitle", "Welcome to MindForge 15"),
    ("welcomeSubtitle", "15 minutes a day to sharpen your mind"),
    ("welcomeDescription", "A 30-day brain training program designed to enhance your cognitive abilities through focused, daily practice."),
    ("getStarted", "Get Started"),
    ("whichDay", "Which day are you on?"),
    ("dayRange", "Select your current day (1-30)"),
    ("day", "Day"),
    ("continue", "Continue"),
    ("todaysFocus", "Today's Focus"),
    ("totalTime", "15 minutes total"),
    ("startSession", "Start Today's Session"),
    ("chooseAnotherDay", "Choose Another Day"),
    ("step", "Step"),
    ("of", "of"),
    ("calmBreathing", "Calm Breathing"),
    ("calmBreathingDesc", "Center yourself with deep, rhythmic breathing"),
    ("workingMemory", "Working Memory"),
    ("workingMemoryDesc", "Challenge your short-term memory capacity"),
    ("activeRecall", "Active Recall"),
    ("activeRecallDesc", "Strengthen memory retrieval pathways"),
    ("reflection", "Reflection"),
    ("reflectionDesc", "Consolidate what you've learned today"),
    ("reflectionPrompt", "Take a moment to reflect on today's practice. Notice how your mind feels."),
    ("minutes", "min"),
    ("seconds", "sec"),
    ("pause", "Pause"),
    ("resume", "Resume"),
    ("next", "Next"),
    ("complete", "Complete"),
    ("breatheIn", "Breathe In"),
    ("hold", "Hold"),
    ("breatheOut", "Breathe Out"),
    ("rememberSequence", "Remember the sequence"),
    ("recallSequence", "Recall the sequence"),
    ("correct", "Correct!"),
    ("tryAgain", "Try Again"),
    ("sessionComplete", "Session Complete!"),
    ("greatWork", "Great work today"),
    ("dayCompleted", "Day {day} completed"),
    ("nextDay", "Next Day"),
    ("backToHome", "Back to Home"),
    ("maintenanceMode", "Maintenance Mode"),
    ("maintenanceDesc", "Keep your mind sharp with weekly practice"),
    ("settings", "Settings"),
    ("theme", "Theme"),
    ("light", "Light"),
    ("dark", "Dark"),
    ("language", "Language"),
    ("resetProgress", "Reset Progress"),
    ("resetConfirm", "Are you sure you want to reset all progress?"),
    ("cancel", "Cancel"),
    ("confirm", "Confirm"),
    ("progress", "Progress"),
    ("daysCompleted", "Days Completed"),
    ("currentStreak", "Current Streak"),
    ("previousDay", "Previous Day"),
    ("nextDayNav", "Next Day"),
    ("focusCalmStart", "Calm start: build the daily habit"),
    ("focusAttention", "Steady attention"),
    ("focusShortSequences", "Short sequences, full focus"),
    ("focusRoutine", "Make the routine automatic"),
    ("focusReview", "Weekly review"),
    ("focusLongerSequences", "Longer sequences"),
    ("focusRetrieval", "Fast, accurate retrieval"),
    ("focusCapacity", "Expand your working memory"),
    ("focusCalmUnderLoad", "Stay calm under load"),
    ("focusDepth", "Deep concentration"),
    ("focusMastery", "Bring it all together"),
    ("focusMaintain", "Keep your mind sharp"),
];

static DA: &[(&str, &str)] = &[
    ("selectLanguage", "Vælg dit sprog"),
    ("welcomeTitle", "Velkommen til MindForge 15"),
    ("welcomeSubtitle", "15 minutter om dagen for at skærpe dit sind"),
    ("welcomeDescription", "Et 30-dages hjernetræningsprogram designet til at forbedre dine kognitive evner gennem fokuseret, daglig øvelse."),
    ("getStarted", "Kom i gang"),
    ("whichDay", "Hvilken dag er du på?"),
    ("dayRange", "Vælg din nuværende dag (1-30)"),
    ("day", "Dag"),
    ("continue", "Fortsæt"),
    ("todaysFocus", "Dagens fokus"),
    ("totalTime", "15 minutter i alt"),
    ("startSession", "Start dagens session"),
    ("chooseAnotherDay", "Vælg en anden dag"),
    ("step", "Trin"),
    ("of", "af"),
    ("calmBreathing", "Rolig vejrtrækning"),
    ("calmBreathingDesc", "Centrer dig selv med dyb, rytmisk vejrtrækning"),
    ("workingMemory", "Arbejdshukommelse"),
    ("workingMemoryDesc", "Udfordre din korttidshukommelse"),
    ("activeRecall", "Aktiv genkaldelse"),
    ("activeRecallDesc", "Styrk hukommelsens genkaldelsesveje"),
    ("reflection", "Refleksion"),
    ("reflectionDesc", "Konsolider hvad du har lært i dag"),
    ("reflectionPrompt", "Tag et øjeblik til at reflektere over dagens øvelse. Læg mærke til, hvordan dit sind føles."),
    ("minutes", "min"),
    ("seconds", "sek"),
    ("pause", "Pause"),
    ("resume", "Genoptag"),
    ("next", "Næste"),
    ("complete", "Fuldfør"),
    ("breatheIn", "Træk vejret ind"),
    ("hold", "Hold"),
    ("breatheOut", "Pust ud"),
    ("rememberSequence", "Husk sekvensen"),
    ("recallSequence", "Genkald sekvensen"),
    ("correct", "Korrekt!"),
    ("tryAgain", "Prøv igen"),
    ("sessionComplete", "Session fuldført!"),
    ("greatWork", "Godt arbejde i dag"),
    ("dayCompleted", "Dag {day} fuldført"),
    ("nextDay", "Næste dag"),
    ("backToHome", "Tilbage til start"),
    ("maintenanceMode", "Vedligeholdelsestilstand"),
    ("maintenanceDesc", "Hold dit sind skarpt med ugentlig øvelse"),
    ("settings", "Indstillinger"),
    ("theme", "Tema"),
    ("light", "Lys"),
    ("dark", "Mørk"),
    ("language", "Sprog"),
    ("resetProgress", "Nulstil fremskridt"),
    ("resetConfirm", "Er du sikker på, at du vil nulstille alt fremskridt?"),
    ("cancel", "Annuller"),
    ("confirm", "Bekræft"),
    ("progress", "Fremskridt"),
    ("daysCompleted", "Dage fuldført"),
    ("currentStreak", "Nuværende streak"),
    ("previousDay", "Forrige dag"),
    ("nextDayNav", "Næste dag"),
    ("focusCalmStart", "Rolig start: byg den daglige vane"),
    ("focusAttention", "Stabil opmærksomhed"),
    ("focusShortSequences", "Korte sekvenser, fuldt fokus"),
    ("focusRoutine", "Gør rutinen automatisk"),
    ("focusReview", "Ugentlig opsamling"),
    ("focusLongerSequences", "Længere sekvenser"),
    ("focusRetrieval", "Hurtig og præcis genkaldelse"),
    ("focusCapacity", "Udvid din arbejdshukommelse"),
    ("focusCalmUnderLoad", "Bevar roen under pres"),
    ("focusDepth", "Dyb koncentration"),
    ("focusMastery", "Saml det hele"),
    ("focusMaintain", "Hold dit sind skarpt"),
];

static DE: &[(&str, &str)] = &[
    ("selectLanguage", "Wähle deine Sprache"),
    ("welcomeTitle", "Willkommen bei MindForge 15"),
    ("welcomeSubtitle", "15 Minuten am Tag, um deinen Geist zu schärfen"),
    ("welcomeDescription", "Ein 30-tägiges Gehirntrainingsprogramm zur Verbesserung deiner kognitiven Fähigkeiten durch fokussierte, tägliche Übung."),
    ("getStarted", "Los geht's"),
    ("whichDay", "An welchem Tag bist du?"),
    ("dayRange", "Wähle deinen aktuellen Tag (1-30)"),
    ("day", "Tag"),
    ("continue", "Weiter"),
    ("todaysFocus", "Heutiger Fokus"),
    ("totalTime", "15 Minuten insgesamt"),
    ("startSession", "Heutige Sitzung starten"),
    ("chooseAnotherDay", "Anderen Tag wählen"),
    ("step", "Schritt"),
    ("of", "von"),
    ("calmBreathing", "Ruhiges Atmen"),
    ("calmBreathingDesc", "Zentriere dich mit tiefer, rhythmischer Atmung"),
    ("workingMemory", "Arbeitsgedächtnis"),
    ("workingMemoryDesc", "Fordere dein Kurzzeitgedächtnis heraus"),
    ("activeRecall", "Aktives Abrufen"),
    ("activeRecallDesc", "Stärke die Abrufwege des Gedächtnisses"),
    ("reflection", "Reflexion"),
    ("reflectionDesc", "Festige, was du heute gelernt hast"),
    ("reflectionPrompt", "Nimm dir einen Moment, um über die heutige Übung nachzudenken. Achte darauf, wie sich dein Geist anfühlt."),
    ("minutes", "Min"),
    ("seconds", "Sek"),
    ("pause", "Pause"),
    ("resume", "Fortsetzen"),
    ("next", "Weiter"),
    ("complete", "Abschließen"),
    ("breatheIn", "Einatmen"),
    ("hold", "Halten"),
    ("breatheOut", "Ausatmen"),
    ("rememberSequence", "Merke dir die Reihenfolge"),
    ("recallSequence", "Rufe die Reihenfolge ab"),
    ("correct", "Richtig!"),
    ("tryAgain", "Nochmal versuchen"),
    ("sessionComplete", "Sitzung abgeschlossen!"),
    ("greatWork", "Gute Arbeit heute"),
    ("dayCompleted", "Tag {day} abgeschlossen"),
    ("nextDay", "Nächster Tag"),
    ("backToHome", "Zurück zur Startseite"),
    ("maintenanceMode", "Wartungsmodus"),
    ("maintenanceDesc", "Halte deinen Geist scharf mit wöchentlicher Übung"),
    ("settings", "Einstellungen"),
    ("theme", "Design"),
    ("light", "Hell"),
    ("dark", "Dunkel"),
    ("language", "Sprache"),
    ("resetProgress", "Fortschritt zurücksetzen"),
    ("resetConfirm", "Bist du sicher, dass du allen Fortschritt zurücksetzen möchtest?"),
    ("cancel", "Abbrechen"),
    ("confirm", "Bestätigen"),
    ("progress", "Fortschritt"),
    ("daysCompleted", "Abgeschlossene Tage"),
    ("currentStreak", "Aktuelle Serie"),
    ("previousDay", "Vorheriger Tag"),
    ("nextDayNav", "Nächster Tag"),
    ("focusCalmStart", "Ruhiger Start: die tägliche Gewohnheit aufbauen"),
    ("focusAttention", "Stabile Aufmerksamkeit"),
    ("focusShortSequences", "Kurze Folgen, voller Fokus"),
    ("focusRoutine", "Die Routine automatisieren"),
    ("focusReview", "Wochenrückblick"),
    ("focusLongerSequences", "Längere Folgen"),
    ("focusRetrieval", "Schnelles, genaues Abrufen"),
    ("focusCapacity", "Arbeitsgedächtnis erweitern"),
    ("focusCalmUnderLoad", "Ruhig bleiben unter Last"),
    ("focusDepth", "Tiefe Konzentration"),
    ("focusMastery", "Alles zusammenführen"),
    ("focusMaintain", "Den Geist scharf halten"),
];

static LT: &[(&str, &str)] = &[
    ("selectLanguage", "Pasirinkite savo kalbą"),
    ("welcomeTitle", "Sveiki atvykę į MindForge 15"),
    ("welcomeSubtitle", "15 minučių per dieną protui lavinti"),
    ("welcomeDescription", "30 dienų smegenų treniravimo programa, skirta pagerinti jūsų kognityvines galimybes per kasdienę praktiką."),
    ("getStarted", "Pradėti"),
    ("whichDay", "Kuri diena?"),
    ("dayRange", "Pasirinkite savo dabartinę dieną (1-30)"),
    ("day", "Diena"),
    ("continue", "Tęsti"),
    ("todaysFocus", "Šios dienos tikslas"),
    ("totalTime", "Iš viso 15 minučių"),
    ("startSession", "Pradėti šios dienos sesiją"),
    ("chooseAnotherDay", "Pasirinkti kitą dieną"),
    ("step", "Žingsnis"),
    ("of", "iš"),
    ("calmBreathing", "Ramus kvėpavimas"),
    ("calmBreathingDesc", "Susikoncentruokite su giliu, ritminiu kvėpavimu"),
    ("workingMemory", "Darbinė atmintis"),
    ("workingMemoryDesc", "Išbandykite savo trumpalaikę atmintį"),
    ("activeRecall", "Aktyvus prisiminimas"),
    ("activeRecallDesc", "Stiprinkite atminties prisiminimo kelius"),
    ("reflection", "Apmąstymas"),
    ("reflectionDesc", "Įtvirtinkite tai, ką išmokote šiandien"),
    ("minutes", "min"),
    ("seconds", "sek"),
    ("pause", "Pauzė"),
    ("resume", "Tęsti"),
    ("next", "Kitas"),
    ("complete", "Baigti"),
    ("breatheIn", "Įkvėpkite"),
    ("hold", "Laikykite"),
    ("breatheOut", "Iškvėpkite"),
    ("rememberSequence", "Įsiminkite seką"),
    ("recallSequence", "Prisiminkite seką"),
    ("correct", "Teisingai!"),
    ("tryAgain", "Bandykite dar kartą"),
    ("sessionComplete", "Sesija baigta!"),
    ("greatWork", "Puikus darbas šiandien"),
    ("dayCompleted", "{day} diena baigta"),
    ("nextDay", "Kita diena"),
    ("backToHome", "Grįžti į pradžią"),
    ("maintenanceMode", "Palaikymo režimas"),
    ("maintenanceDesc", "Išlaikykite protą aštrų praktikuodami kas savaitę"),
    ("settings", "Nustatymai"),
    ("theme", "Tema"),
    ("light", "Šviesi"),
    ("dark", "Tamsi"),
    ("language", "Kalba"),
    ("resetProgress", "Atstatyti progresą"),
    ("resetConfirm", "Ar tikrai norite atstatyti visą progresą?"),
    ("cancel", "Atšaukti"),
    ("confirm", "Patvirtinti"),
    ("progress", "Progresas"),
    ("daysCompleted", "Baigtos dienos"),
    ("currentStreak", "Dabartinė serija"),
    ("previousDay", "Ankstesnė diena"),
    ("nextDayNav", "Kita diena"),
    ("focusCalmStart", "Ramus startas: kurkite kasdienį įprotį"),
    ("focusAttention", "Pastovus dėmesys"),
    ("focusShortSequences", "Trumpos sekos, visas dėmesys"),
    ("focusRoutine", "Paverskite rutiną automatine"),
    ("focusReview", "Savaitės apžvalga"),
    ("focusLongerSequences", "Ilgesnės sekos"),
    ("focusRetrieval", "Greitas ir tikslus prisiminimas"),
    ("focusCapacity", "Plėskite darbinę atmintį"),
    ("focusCalmUnderLoad", "Išlikite ramūs esant krūviui"),
    ("focusDepth", "Gili koncentracija"),
    ("focusMastery", "Sujunkite viską"),
    ("focusMaintain", "Išlaikykite protą aštrų"),
];
