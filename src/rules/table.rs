// src/rules/table.rs
use super::profile::{LanguageProfile, ResponseRule::*};

pub static BUILTIN_PROFILES: &[LanguageProfile] = &[
    // English, also the fallback profile
    LanguageProfile {
        code: "en",
        greetings: &["Hello", "Hi", "Hey there"],
        how_are_you: &["I'm doing well, how are you?"],
        goodbye: &["Goodbye", "See you later", "Bye"],
        default: "How can I help you?",
        responses: &[
            ("i need help", Plain("I'm here to help! What can I do for you?")),
            ("thank you", Plain("You're welcome!")),
            ("good morning", Plain("Good morning! How are you today?")),
            ("good night", Plain("Good night! Have a great rest!")),
            (
                "i'm hungry",
                Plain("I can help you find some good restaurants nearby. What kind of food would you like?"),
            ),
        ],
    },
    // Indian languages
    LanguageProfile {
        code: "hi",
        greetings: &["नमस्ते", "नमस्कार", "हैलो"],
        how_are_you: &["मैं ठीक हूं, आप कैसे हैं?"],
        goodbye: &["फिर मिलेंगे", "अलविदा", "नमस्ते"],
        default: "मैं आपकी कैसे मदद कर सकता हूं?",
        responses: &[
            ("मैं ठीक हूं", Plain("बहुत अच्छा! क्या मैं आपकी कोई मदद कर सकता हूं?")),
            ("धन्यवाद", Plain("आपका स्वागत है!")),
            ("शुभ रात्रि", Plain("शुभ रात्रि! अच्छी नींद आए!")),
            (
                "भूख लगी है",
                Plain("मैं आपको अच्छे रेस्टोरेंट ढूंढने में मदद कर सकता हूं। आप किस तरह का खाना पसंद करेंगे?"),
            ),
            ("मदद चाहिए", Plain("ज़रूर, मैं आपकी क्या मदद कर सकता हूं?")),
        ],
    },
    LanguageProfile {
        code: "te",
        greetings: &["నమస్కారం", "హలో"],
        how_are_you: &["నేను బాగున్నాను, మీరు ఎలా ఉన్నారు?"],
        goodbye: &["వీడ్కోలు", "మళ్ళీ కలుద్దాం"],
        default: "నేను మీకు ఎలా సహాయపడగలను?",
        responses: &[],
    },
    LanguageProfile {
        code: "ta",
        greetings: &["வணக்கம்", "நமஸ்காரம்"],
        how_are_you: &["நான் நலம், நீங்கள் எப்படி இருக்கிறீர்கள்?"],
        goodbye: &["பிறகு சந்திப்போம்", "வணக்கம்"],
        default: "நான் உங்களுக்கு எப்படி உதவ முடியும்?",
        responses: &[],
    },
    LanguageProfile {
        code: "kn",
        greetings: &["ನಮಸ್ಕಾರ", "ಹಲೋ"],
        how_are_you: &["ನಾನು ಚೆನ್ನಾಗಿದ್ದೇನೆ, ನೀವು ಹೇಗಿದ್ದೀರಿ?"],
        goodbye: &["ಮತ್ತೆ ಸಿಗೋಣ", "ನಮಸ್ಕಾರ"],
        default: "ನಾನು ನಿಮಗೆ ಹೇಗೆ ಸಹಾಯ ಮಾಡಬಹುದು?",
        responses: &[],
    },
    LanguageProfile {
        code: "ml",
        greetings: &["നമസ്കാരം", "ഹലോ"],
        how_are_you: &["എനിക്ക് സുഖമാണ്, നിങ്ങൾക്ക് എങ്ങനെ ഉണ്ട്?"],
        goodbye: &["വിട", "നമസ്കാരം"],
        default: "എനിക്ക് നിങ്ങളെ എങ്ങനെ സഹായിക്കാൻ കഴിയും?",
        responses: &[],
    },
    LanguageProfile {
        code: "bn",
        greetings: &["নমস্কার", "হ্যালো"],
        how_are_you: &["আমি ভালো আছি, আপনি কেমন আছেন?"],
        goodbye: &["বিদায়", "আবার দেখা হবে"],
        default: "আমি আপনাকে কীভাবে সাহায্য করতে পারি?",
        responses: &[],
    },
    LanguageProfile {
        code: "gu",
        greetings: &["નમસ્તે", "હેલો"],
        how_are_you: &["હું સારું છું, તમે કેમ છો?"],
        goodbye: &["આવજો", "ફરી મળીશું"],
        default: "હું તમને કેવી રીતે મદદ કરી શકું?",
        responses: &[],
    },
    // Nigerian languages
    LanguageProfile {
        code: "yo",
        greetings: &["Ẹ nlẹ́", "Ẹ káàárọ̀", "Báwo ni"],
        how_are_you: &["Mo wà dáadáa, báwo ni ẹ̀yin?"],
        goodbye: &["Ó dàbọ̀", "Ṣé àrọ́ìkúlẹ̀"],
        default: "Báwo ni mo ṣe lè ràn yín lọ́wọ́?",
        responses: &[
            ("mo wa daada", Plain("Ó dára púpọ̀! Ṣé mo lè ràn yín lọ́wọ́?")),
            ("e se", Plain("Ẹ kú àárọ̀!")),
            (
                "ebi n pa mi",
                Plain("Mo lè ràn yín lọ́wọ́ láti wá ibi tó dára láti jẹun. Irú oúnjẹ wo ni ẹ fẹ́?"),
            ),
            ("mo nilo iranlowo", Plain("Dájúdájú, báwo ni mo ṣe lè ràn yín lọ́wọ́?")),
            ("o dara", Plain("Ó dára púpọ̀! Ṣé ẹ nílò nǹkan mìíràn?")),
        ],
    },
    LanguageProfile {
        code: "ha",
        greetings: &["Sannu", "Barka da yamma", "Barka da zuwa"],
        how_are_you: &["Ina lafiya, yaya kake/kike?"],
        goodbye: &["Sai an jima", "Sai gobe"],
        default: "Yaya zan taimaka maka/miki?",
        responses: &[],
    },
    LanguageProfile {
        code: "ig",
        greetings: &["Nnọọ", "Kedụ", "Ụtụtụ ọma"],
        how_are_you: &["Adị m mma, kedụ ka ị mere?"],
        goodbye: &["Ka ọ dị", "Ka emesia"],
        default: "Kedụ ka m ga-esi nyere gị aka?",
        responses: &[],
    },
    // Other African languages
    LanguageProfile {
        code: "sw",
        greetings: &["Jambo", "Habari", "Hujambo"],
        how_are_you: &["Mimi ni mzima, vipi wewe?"],
        goodbye: &["Kwaheri", "Tutaonana"],
        default: "Nawezaje kukusaidia?",
        responses: &[],
    },
    LanguageProfile {
        code: "am",
        greetings: &["ሰላም", "እንደምን አደርክ/ሽ"],
        how_are_you: &["ጥሩ ነኝ፣ አንተ/ቺስ እንደምን ነህ/ሽ?"],
        goodbye: &["ደህና ሁን/ኚ", "ቻው"],
        default: "እንዴት ልረዳህ/ሽ?",
        responses: &[],
    },
    // European languages
    LanguageProfile {
        code: "fr",
        greetings: &["Bonjour", "Salut", "Bonsoir"],
        how_are_you: &["Je vais bien, et vous?"],
        goodbye: &["Au revoir", "À bientôt"],
        default: "Comment puis-je vous aider?",
        responses: &[
            ("comment ca va", Plain("Je vais très bien, merci! Et vous?")),
            ("ca va bien", Plain("Je suis ravi(e) de l'entendre!")),
            (
                "ca va mal",
                Plain("Je suis désolé(e) d'entendre ça. Puis-je faire quelque chose pour vous aider?"),
            ),
            (
                "j'ai besoin",
                Nested(&[
                    ("d'aide", "Bien sûr, je suis là pour vous aider. Que puis-je faire pour vous?"),
                    (
                        "de manger",
                        "Je peux vous recommander de bons restaurants. Quel type de cuisine préférez-vous?",
                    ),
                    ("d'un conseil", "Je serai ravi(e) de vous conseiller. Sur quel sujet?"),
                ]),
            ),
            ("merci", Plain("Je vous en prie!")),
            (
                "bonne",
                Nested(&[
                    ("nuit", "Bonne nuit! Faites de beaux rêves!"),
                    ("journée", "Bonne journée à vous aussi!"),
                    ("soirée", "Bonne soirée! Profitez bien!"),
                ]),
            ),
        ],
    },
    LanguageProfile {
        code: "es",
        greetings: &["¡Hola!", "¡Buenos días!", "¡Buenas tardes!"],
        how_are_you: &["Estoy bien, ¿y tú?"],
        goodbye: &["¡Adiós!", "¡Hasta luego!"],
        default: "¿Cómo puedo ayudarte?",
        responses: &[
            ("estoy bien", Plain("¡Me alegro! ¿Necesitas ayuda con algo?")),
            ("gracias", Plain("¡De nada!")),
            ("buenas noches", Plain("¡Buenas noches! ¡Que descanses!")),
            (
                "tengo hambre",
                Plain("Puedo ayudarte a encontrar buenos restaurantes. ¿Qué tipo de comida te gustaría?"),
            ),
            ("necesito ayuda", Plain("¡Por supuesto! ¿En qué puedo ayudarte?")),
        ],
    },
    // East Asian languages
    LanguageProfile {
        code: "zh",
        greetings: &["你好", "早上好", "晚上好"],
        how_are_you: &["我很好，你呢？"],
        goodbye: &["再见", "拜拜"],
        default: "我能帮你什么？",
        responses: &[
            ("我很好", Plain("太好了！我能帮你什么吗？")),
            ("谢谢", Plain("不用谢！")),
            ("晚安", Plain("晚安！祝你好梦！")),
            ("我饿了", Plain("我可以帮你找到好的餐馆。你想吃什么类型的食物？")),
            ("需要帮助", Plain("当然可以，你需要什么帮助？")),
            ("早上好", Plain("早上好！今天感觉如何？")),
        ],
    },
    LanguageProfile {
        code: "ja",
        greetings: &["こんにちは", "おはようございます"],
        how_are_you: &["元気です、あなたは？"],
        goodbye: &["さようなら", "じゃあね"],
        default: "どのようにお手伝いできますか？",
        responses: &[
            ("元気です", Plain("よかったです！何かお手伝いできることはありますか？")),
            ("ありがとう", Plain("どういたしまして！")),
            ("おやすみ", Plain("おやすみなさい！良い夢を！")),
            ("お腹が空きました", Plain("良いレストランをお探しできます。どんな料理がお好みですか？")),
            ("助けて", Plain("もちろん、どのようなお手伝いが必要ですか？")),
        ],
    },
    LanguageProfile {
        code: "ko",
        greetings: &["안녕하세요", "좋은 아침이에요"],
        how_are_you: &["저는 잘 지내요, 당신은요?"],
        goodbye: &["안녕히 가세요", "다음에 봐요"],
        default: "어떻게 도와드릴까요?",
        responses: &[],
    },
];
