//! Bundled kaomoji table

/// (category, [(symbol, tags)])
pub(super) const BUILTIN: &[(&str, &[(&str, &[&str])])] = &[
    (
        "Joy",
        &[
            ("(* ^ ω ^)", &["happy", "joy", "smile"]),
            ("(´ ∀ ` *)", &["happy", "joy", "cheerful"]),
            ("٩(◕‿◕｡)۶", &["happy", "joy", "excited", "dance"]),
            ("☆*:.｡.o(≧▽≦)o.｡.:*☆", &["happy", "joy", "sparkle", "excited"]),
            ("(o^▽^o)", &["happy", "joy", "grin"]),
            ("ヽ(・∀・)ﾉ", &["happy", "joy", "cheer", "hands up"]),
            ("(≧◡≦)", &["happy", "joy", "cute"]),
            ("＼(٥⁀▽⁀ )／", &["happy", "relief", "hooray"]),
        ],
    ),
    (
        "Love",
        &[
            ("(ﾉ´ з `)ノ", &["love", "kiss"]),
            ("(♡μ_μ)", &["love", "shy", "heart"]),
            ("(*^^*)♡", &["love", "happy", "heart"]),
            ("☆⌒ヽ(*'､^*)chu", &["love", "kiss", "chu"]),
            ("(´ ε ` )♡", &["love", "kiss", "heart"]),
            ("♡( ◡‿◡ )", &["love", "heart", "content"]),
            ("(´｡• ω •｡`) ♡", &["love", "cute", "heart"]),
        ],
    ),
    (
        "Embarrassment",
        &[
            ("(⌒_⌒;)", &["embarrassed", "awkward", "sweat"]),
            ("(o^ ^o)", &["embarrassed", "blush"]),
            ("(*/ω＼)", &["embarrassed", "shy", "hide"]),
            ("(/▿＼ )", &["embarrassed", "shy", "cover face"]),
            ("(〃＞＿＜;〃)", &["embarrassed", "flustered"]),
        ],
    ),
    (
        "Sympathy",
        &[
            ("(ノ_<。)ヾ(´ ▽ ` )", &["sympathy", "comfort", "pat"]),
            ("ヽ(~_~(・_・ )ゝ", &["sympathy", "comfort"]),
            ("(っ´ω`)ﾉ(╥ω╥)", &["sympathy", "comfort", "cry"]),
            ("ρ(- ω -、)ヾ(￣ω￣; )", &["sympathy", "comfort", "sad"]),
        ],
    ),
    (
        "Dissatisfaction",
        &[
            ("(＃＞＜)", &["dissatisfied", "annoyed", "frustrated"]),
            ("(；⌣̀_⌣́)", &["dissatisfied", "annoyed"]),
            ("(￢_￢)", &["dissatisfied", "unimpressed", "side eye"]),
            ("(；￣Д￣)", &["dissatisfied", "shocked"]),
            ("(︶︹︺)", &["dissatisfied", "pout", "sulk"]),
        ],
    ),
    (
        "Anger",
        &[
            ("(＃`Д´)", &["angry", "mad", "rage"]),
            ("(`皿´＃)", &["angry", "mad", "teeth"]),
            ("ヽ( `д´*)ノ", &["angry", "mad", "tantrum"]),
            ("(╬ Ò﹏Ó)", &["angry", "mad", "fury"]),
            ("(ノಠ益ಠ)ノ", &["angry", "mad", "rage"]),
            ("٩(╬ʘ益ʘ╬)۶", &["angry", "mad", "furious"]),
        ],
    ),
    (
        "Sadness",
        &[
            ("(ノ_<。)", &["sad", "cry", "tears"]),
            ("(╥_╥)", &["sad", "cry", "tears"]),
            ("(｡•́︿•̀｡)", &["sad", "upset", "pout"]),
            ("(っ˘̩╭╮˘̩)っ", &["sad", "cry", "hug"]),
            ("(ಥ﹏ಥ)", &["sad", "cry", "sob"]),
            ("o(TヘTo)", &["sad", "cry", "tears"]),
        ],
    ),
    (
        "Animals",
        &[
            ("(=^･ω･^=)", &["cat", "animal", "neko"]),
            ("ฅ^•ﻌ•^ฅ", &["cat", "animal", "paws"]),
            ("▼・ᴥ・▼", &["dog", "animal", "puppy"]),
            ("ʕ •ᴥ•ʔ", &["bear", "animal"]),
            ("(・⊝・)", &["bird", "animal", "penguin"]),
            ("(V) (°,,,,°) (V)", &["crab", "animal", "sea"]),
            ("くコ:彡", &["squid", "animal", "sea"]),
        ],
    ),
    (
        "Table Flip",
        &[
            ("(╯°□°）╯︵ ┻━┻", &["table flip", "angry", "rage"]),
            ("┬─┬ノ( º _ ºノ)", &["table flip", "calm", "put back"]),
            ("(ノಠ益ಠ)ノ彡┻━┻", &["table flip", "angry", "mad"]),
            ("┻━┻ ︵ヽ(`Д´)ﾉ︵ ┻━┻", &["table flip", "double", "rage"]),
        ],
    ),
    (
        "Greeting",
        &[
            ("(*・ω・)ﾉ", &["greeting", "hello", "wave"]),
            ("( ´ ▽ ` )ﾉ", &["greeting", "hi", "wave"]),
            ("(^-^*)/", &["greeting", "hello", "wave"]),
            ("(￣▽￣)ノ", &["greeting", "bye", "wave"]),
            ("ヾ(・ω・*)", &["greeting", "bye", "wave"]),
        ],
    ),
    (
        "Dance",
        &[
            ("ヾ(-_- )ゞ", &["dance", "groove"]),
            ("♪┏(・o･)┛♪", &["dance", "music", "party"]),
            ("ヘ(￣ω￣ヘ)", &["dance", "shuffle"]),
            ("(ノ￣ー￣)ノ", &["dance", "wave"]),
            ("└(￣-￣└))", &["dance", "robot"]),
        ],
    ),
];
