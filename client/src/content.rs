//! Fixed site content: password, questions, blessings, canned replies.
//!
//! Everything here is data, not logic. Views and state machines take these
//! tables as inputs so tests can substitute their own.

use crate::games::lock::LockQuestion;

/// Name the site is addressed to.
pub const HERO_NAME: &str = "hqq";

/// Author of the site, used in replies and the closing note.
pub const AUTHOR_NAME: &str = "Carrot LUO";

/// Shared secret for the entrance gate.
pub const SITE_PASSWORD: &str = "1025";

pub const PASSWORD_HINT: &str = "密码不对，请再试一次。Hint: 生日数字哦～";

// =============================================================================
// GATE AND HOME
// =============================================================================

pub const GATE_TITLE: &str = "Welcome to the mysterious web, detective seesaw";
pub const GATE_SUBTITLE: &str = "欢迎来到神秘网站，解锁专属回忆（输入生日数字）";
pub const GATE_TIP: &str = "Tip: 这个网站为seesaw的22岁生日准备，记得在10.25那天打开看哦～";

pub const HOME_INTRO: &str = "这里藏着我们走过的时光记忆，回首再盼，忽而六年飞逝。";
pub const HOME_MISSION: &str =
    "Complete the mini-games to unlock the final chapter: \"THE YEARS WE WALK TOGETHER\".";
pub const HOME_TIPS: &str = "留言区支持自动回复关键词，快来尝试！";

pub const ALBUM_HINT: &str = "上传你的照片来替换占位。图片会保存在你的浏览器（localStorage）。";

/// Placeholder tiles shown while the album is empty.
pub const ALBUM_PLACEHOLDERS: usize = 6;

pub const GAMES_HINT: &str = "选择下面的页面进入单独的互动页面（每页仅显示一个主要游戏）。";

pub const MESSAGE_PLACEHOLDER: &str = "写下你的祝福或问题...（例如：生日快乐）";
pub const MESSAGE_FOOTER: &str = "还有好多好多没有探索啊，快来跟我对话！";

/// Icons for the pairing game; each appears twice in a deal.
pub const MEMORY_ICONS: [&str; 6] = ["📷", "🏞️", "🎁", "✉️", "🔐", "🕯️"];

pub const LOCK_QUESTIONS: [LockQuestion; 3] = [
    LockQuestion { prompt: "我们第一次去旅行的年月？(数字)", answer: "202307" },
    LockQuestion { prompt: "你最喜欢的口味？(我说的是喝的，希望我没说错hhh)", answer: "抹茶" },
    LockQuestion { prompt: "你收到的十八岁生日礼物？(当然是说我送的嘿嘿)", answer: "便携式咖啡机" },
];

pub const LOCK_OPEN_MESSAGE: &str = "密码全部正确，历史之门已打开。";
pub const LOCK_RETRY_MESSAGE: &str = "有一处不对，回忆或许藏在更深的地方。";

pub const ROULETTE_OPTIONS: [&str; 8] = [
    "今天的你，是世界主角。",
    "誕生日おめでとう。",
    "生辰喜乐，旅行者。今日风里带着枫叶的暖意，想来是为你的新岁送来了祝福。愿你往后的旅途，常有清风相伴，所见皆为心之所向。",
    "Wishing you a lovely birthday. Time moves fast, but today, let it gift you simple, pure happiness.",
    "课程如鱼得水，考试门门赛高！学习生活一切顺利！",
    "友情值 +1025！",
    "Timekeeper, continue your journey in the storm. The world is waiting for you to save!",
    "新的篇章等待你继续书写。",
];

pub const SURVEY_QUESTIONS: [&str; 5] = [
    "未来的版图探索地点？更想去什么地方？",
    "遇到困难时你更想要：安静倾听 / 激烈讨论？",
    "你觉得我们友谊里最重要的是？",
    "最喜欢和Carrot LUO一起做的事是什么？",
    "给未来的自己一句话：",
];

pub const WELCOME_MESSAGE: &str = "欢迎来到留言板！来和我对话吧！";

pub const REPLY_THANKS: &str = "嘿，你不许这么快感动～💜";
pub const REPLY_BIRTHDAY: &str = "生日这天，你是主角，也是光。——From Carrot LUO";
pub const REPLY_MUSE: &str = "哀酱可是这个网页的灵感缪斯。";
pub const REPLY_BESTIE: &str = "嘿嘿，被你发现了，我们可是超级搭子。";
pub const REPLY_FALLBACKS: [&str; 2] = [
    "我在看着你打字呢，Carrot LUO～",
    "我写了超级长的代码，你快说我什么都特别好，你快说呀！",
];

pub const FINAL_TITLE: &str = "THE YEARS WE WALK TOGETHER";
pub const FINAL_SUBTITLE: &str = "A journey written in light and laughter.";

pub const FINAL_NOTE: &str = "From every laugh we shared to every problem we solved, these are the years we walk together. Happy 22nd Birthday, my best Seesaw.";
