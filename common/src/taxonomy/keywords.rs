//! キーワードセット定義
//!
//! 各セットは小文字のキーワード（単語または短いフレーズ）の集合。
//! 照合はトークン一致ではなく、検索用テキストに対する部分一致で行う。
//! 実行時に変更しない静的データ。

/// 名前付きキーワードセット
#[derive(Debug, PartialEq, Eq)]
pub struct KeywordSet {
    /// セット名（ログ・診断出力用）
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordSet {
    /// 最初に含まれていたキーワードを返す
    ///
    /// `description` は小文字化済みであること。
    pub fn first_match(&self, description: &str) -> Option<&'static str> {
        self.keywords.iter().copied().find(|k| description.contains(k))
    }

    pub fn matches(&self, description: &str) -> bool {
        self.first_match(description).is_some()
    }
}

// --- Electrical ---

pub static ELECTRICAL_CONSUMABLES: KeywordSet = KeywordSet {
    name: "electrical-consumables",
    keywords: &[
        "terminal", "connector", "crimp", "heat shrink", "shrink tube", "electrical tape",
        "cable tie", "zip tie", "wire tie", "fuse", "solder", "splice", "wire nut", "bulb",
        "battery", "batteries",
    ],
};

pub static ELECTRICAL_COMPONENTS: KeywordSet = KeywordSet {
    name: "electrical-components",
    keywords: &[
        "switch", "breaker", "relay", "outlet", "receptacle", "inverter", "charger",
        "alternator", "solenoid", "sensor", "controller", "transformer", "regulator",
        "fixture", "panel", "meter", "wire", "cable",
    ],
};

// --- Hull ---

pub static HULL_MAINTENANCE: KeywordSet = KeywordSet {
    name: "hull-maintenance",
    keywords: &[
        "antifouling", "bottom paint", "paint", "primer", "gelcoat", "fiberglass", "epoxy",
        "resin", "filler", "fairing", "sealant", "caulk", "zinc", "anode", "fastener",
        "screw", "bolt", "through-hull", "thru-hull", "seacock", "hatch", "porthole", "wax",
    ],
};

pub static HULL_RIGGING: KeywordSet = KeywordSet {
    name: "hull-rigging",
    keywords: &[
        "cleat", "chock", "fender", "dock line", "mooring", "anchor", "chain", "shackle",
        "windlass", "bow roller", "stanchion", "lifeline", "swivel",
    ],
};

/// 船体に据え付けの消火・検知設備
pub static HULL_FIRE_SAFETY: KeywordSet = KeywordSet {
    name: "hull-fire-safety",
    keywords: &[
        "fire suppression", "fire system", "fireboy", "halon", "fm-200", "smoke detector",
        "heat detector", "fire port",
    ],
};

// --- Safety（救命具はHullと共用）---

pub static FIRE_SAFETY: KeywordSet = KeywordSet {
    name: "fire-safety",
    keywords: &[
        "fire", "extinguisher", "smoke detector", "smoke alarm", "halon", "carbon monoxide",
        "co detector",
    ],
};

pub static RESCUE_SAFETY: KeywordSet = KeywordSet {
    name: "rescue-safety",
    keywords: &[
        "life jacket", "lifejacket", "pfd", "life ring", "lifebuoy", "life raft", "liferaft",
        "throw bag", "throwable", "epirb", "flare", "harness", "tether", "jackline",
        "overboard",
    ],
};

// --- Common Maintenance ---

pub static MAINTENANCE_TOOLS: KeywordSet = KeywordSet {
    name: "maintenance-tools",
    keywords: &[
        "wrench", "screwdriver", "plier", "hammer", "drill", "socket set", "saw", "chisel",
        "utility knife", "ratchet", "crimper", "sander", "grinder", "heat gun", "tool",
    ],
};

pub static TEST_MEASUREMENT: KeywordSet = KeywordSet {
    name: "test-measurement",
    keywords: &[
        "multimeter", "tester", "gauge", "gage", "thermometer", "hydrometer", "caliper",
        "tape measure", "voltmeter", "ammeter", "level",
    ],
};

/// 清掃用品（Common Maintenance・Recreational で共用）
pub static CLEANING: KeywordSet = KeywordSet {
    name: "cleaning",
    keywords: &[
        "clean", "polish", "soap", "detergent", "degreaser", "brush", "sponge", "mop",
        "bucket", "scrub", "wipe", "squeegee", "chamois", "vacuum",
    ],
};

pub static PPE: KeywordSet = KeywordSet {
    name: "ppe",
    keywords: &[
        "glove", "goggle", "safety glasses", "respirator", "dust mask", "ear plug", "earplug",
        "hearing protection", "coverall", "face shield", "knee pad",
    ],
};

pub static DOCUMENTATION: KeywordSet = KeywordSet {
    name: "documentation",
    keywords: &[
        "manual", "logbook", "log book", "handbook", "guide", "documentation", "instructions",
        "binder", "chart",
    ],
};

// --- Recreational ---

pub static TOOLS_LITERAL: KeywordSet = KeywordSet {
    name: "tools-literal",
    keywords: &["tools"],
};

pub static MEDICAL_SAFETY_LITERAL: KeywordSet = KeywordSet {
    name: "medical-safety-literal",
    keywords: &["medical", "safety"],
};

pub static FOOD_GALLEY_LITERAL: KeywordSet = KeywordSet {
    name: "food-galley-literal",
    keywords: &["food", "galley"],
};

pub static OFFICE_DECOR: KeywordSet = KeywordSet {
    name: "office-decor",
    keywords: &[
        "book", "log", "paper", "record", "pencil", "stationery", "notebook", "picture",
        "decor", "vase", "candle", "artwork",
    ],
};

pub static WATER_RECREATION: KeywordSet = KeywordSet {
    name: "water-recreation",
    keywords: &[
        "snorkel", "dive", "diving", "wetsuit", "kayak", "paddle", "surfboard", "water ski",
        "wakeboard", "tube", "fishing", "reel", "lure", "swim", "inflatable",
    ],
};

pub static FITNESS: KeywordSet = KeywordSet {
    name: "fitness",
    keywords: &[
        "fitness", "exercise", "yoga", "dumbbell", "kettlebell", "resistance band", "weights",
        "jump rope", "workout",
    ],
};

pub static RECREATIONAL_COMPONENTS: KeywordSet = KeywordSet {
    name: "recreational-components",
    keywords: &[
        "sofa", "chair", "table", "lamp", "cushion", "pillow", "furniture", "mattress",
        "curtain", "hinge", "latch", "knob", "drawer",
    ],
};

pub static RECREATIONAL_CONSUMABLES: KeywordSet = KeywordSet {
    name: "recreational-consumables",
    keywords: &[
        "lubricant", "oil", "wax", "adhesive", "protectant", "glue", "tape", "battery",
        "batteries",
    ],
};

// --- Sailing ---

pub static SAIL_CANVAS: KeywordSet = KeywordSet {
    name: "sail-canvas",
    keywords: &[
        "mainsail", "headsail", "jib", "genoa", "spinnaker", "gennaker", "sail cover",
        "sail bag", "sailcloth", "canvas", "bimini", "dodger", "batten",
    ],
};

pub static RUNNING_RIGGING: KeywordSet = KeywordSet {
    name: "running-rigging",
    keywords: &[
        "halyard", "sheet", "rope", "block", "pulley", "rope clutch", "jammer", "traveler",
        "vang", "downhaul", "outhaul", "reefing",
    ],
};

pub static STANDING_RIGGING: KeywordSet = KeywordSet {
    name: "standing-rigging",
    keywords: &[
        "shroud", "forestay", "backstay", "headstay", "turnbuckle", "swage", "chainplate",
        "spreader", "mast", "boom", "rigging wire", "toggle",
    ],
};

pub static WINCH_DECK: KeywordSet = KeywordSet {
    name: "winch-deck",
    keywords: &[
        "winch", "cleat", "fairlead", "track", "furler", "furling", "padeye", "snatch",
        "stopper", "deck organizer",
    ],
};

pub static SAILING_CONSUMABLES: KeywordSet = KeywordSet {
    name: "sailing-consumables",
    keywords: &[
        "sail tape", "whipping", "mclube", "lubricant", "telltale", "ring ding", "cotter pin",
        "split ring", "tape", "wax",
    ],
};

pub static SAIL_REPAIR: KeywordSet = KeywordSet {
    name: "sail-repair",
    keywords: &[
        "needle", "thread", "sewing", "palm", "patch", "awl", "seam", "repair kit",
    ],
};
