//! Static page content. Everything here lives for the lifetime of the page and
//! is never mutated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub name: &'static str,
    pub url: &'static str,
    pub period: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Video {
    pub title: &'static str,
    pub url: &'static str,
    pub channel: &'static str,
    pub caption: Option<&'static str>,
    /// Space-separated `#tag` list.
    pub hashtags: Option<&'static str>,
    pub music: Option<&'static str>,
}

pub const ENGLISH_NAME: &str = "Parn (Sitharinee Luntha)";
pub const THAI_NAME: &str = "ป่าน (สิธาริณี ลุนทา)";

pub const CHANNELS: &[Channel] = &[
    Channel {
        name: "แก้วมังกรที่ไม่ใช่ผลไม้",
        url: "https://www.tiktok.com/@keawmangkorn",
        period: "Jan 2024 - Current",
        role: "Main Editor",
    },
    Channel {
        name: "แก้วมังกร คนโปรดของจักรวาล",
        url: "https://www.tiktok.com/@keawmangkorn.83",
        period: "Jan 2024 - Feb 2024",
        role: "Editor, Graphic Design",
    },
    Channel {
        name: "Doris Thailand",
        url: "https://www.tiktok.com/@doris.thailand",
        period: "Nov 2024 - Current",
        role: "Editor",
    },
    Channel {
        name: "E&P AUDIO",
        url: "https://www.tiktok.com/@easyandperfectaudio",
        period: "Jan 2024 - Current",
        role: "Editor",
    },
    Channel {
        name: "Lonzuer Premium",
        url: "https://www.tiktok.com/@lonzuerpremium",
        period: "Jan 2024 - Dec 2024",
        role: "Editor",
    },
    Channel {
        name: "Pangboyz (แป้งบอยเอง)",
        url: "https://www.tiktok.com/@pangboyz",
        period: "July 2024 - Current",
        role: "Camera man",
    },
];

const KEAW_MUSIC: Option<&str> = Some("เสียงต้นฉบับ - แก้วมังกร ที่ไม่ใช่ผลไม้");
const EP_MUSIC: Option<&str> = Some("เสียงต้นฉบับ - E&P Audio");

pub const VIDEOS: &[Video] = &[
    Video {
        title: "งานเลี้ยงบริษัท",
        url: "https://www.tiktok.com/@keawmangkorn/video/7484208719530708225",
        channel: "แก้วมังกร",
        caption: Some("ปาร์ตี้บริษัท ชุดแฟนซี มาดูกัน ใครแต่งเป็นอะไร"),
        hashtags: Some("#แก้วมังกร #แก้วมังกรที่ไม่ใช่ผลไม้ #แก้วมังกรสะใภ้จีน #easyandperfect #ใช้ดีมีความสุข #งานเลี้ยงบริษัท #พนักงานออฟฟิศ #ชุดแฟนซี"),
        music: KEAW_MUSIC,
    },
    Video {
        title: "คนในบริษัทกินท่าอะไรบ้าง",
        url: "https://www.tiktok.com/@keawmangkorn/video/7483817632483839248",
        channel: "แก้วมังกร",
        caption: Some("บริษัทนี้ กินแต่หมูกะทะ 555"),
        hashtags: Some("#แก้วมังกร #แก้วมังกรที่ไม่ใช่ผลไม้ #แก้วมังกรสะใภ้จีน #easyandperfect #ใช้ดีมีความสุข #งานเลี้ยงบริษัท #พนักงานออฟฟิศ"),
        music: KEAW_MUSIC,
    },
    Video {
        title: "กิจกรรมท่องเที่ยวบริษัท",
        url: "https://www.tiktok.com/@keawmangkorn/video/7484516269224398097",
        channel: "แก้วมังกร",
        caption: Some("ทีมสีชมพูเรามันเลิศ 💕"),
        hashtags: Some("#แก้วมังกร #แก้วมังกรที่ไม่ใช่ผลไม้ #แก้วมังกรสะใภ้จีน #easyandperfect #ใช้ดีมีความสุข #งานเลี้ยงบริษัท #พนักงานออฟฟิศ #เขาใหญ่"),
        music: KEAW_MUSIC,
    },
    Video {
        title: "เทคนิคการทำ Tiktok",
        url: "https://www.tiktok.com/@keawmangkorn/video/7481878776536665360",
        channel: "แก้วมังกร",
        caption: Some("ทำไปเหอะ ถึงแม้ช่วงนี้ คลิปจะไม่ขึ้นฟิต"),
        hashtags: Some("#แก้วมังกร #แก้วมังกรที่ไม่ใช่ผลไม้ #แก้วมังกรสะใภ้จีน #tiktok"),
        music: KEAW_MUSIC,
    },
    Video {
        title: "รีวิวโทรศัพท์คิตตี้",
        url: "https://www.tiktok.com/@keawmangkorn/video/7481458600750189825",
        channel: "แก้วมังกร",
        caption: Some("รีวิว โทรศัพท์ของสาวหวานอย่างเรา"),
        hashtags: Some("#แก้วมังกร #แก้วมังกรที่ไม่ใช่ผลไม้ #แก้วมังกรสะใภ้จีน #โทรศัพท์ #โทรศัพท์มือถือ #hellokitty"),
        music: KEAW_MUSIC,
    },
    Video {
        title: "วิธีใช้งานลำโพง",
        url: "https://www.tiktok.com/@easyandperfectaudio/video/7452660308424019207",
        channel: "E&P AUDIO",
        caption: Some("ตอบกลับ @W_zhop วิธีชาร์จแบตลำโพง และ ไมค์ 4205 Plus ดูแล้วทำตามได้เลย!"),
        hashtags: Some("#easyandperfectใช้ดีมีความสุข #easyandperfect #ลําโพง #แม่ค้าน่ารัก #ลําโพงบลูทูธไร้สาย #howto"),
        music: EP_MUSIC,
    },
    Video {
        title: "ไลฟ์สดขายลำโพง",
        url: "https://www.tiktok.com/@easyandperfectaudio/video/7474172758625242423",
        channel: "E&P AUDIO",
        caption: Some("The sky เสียงดีจัดหนักจัดเต็ม"),
        hashtags: Some("#easyandperfectใช้ดีมีความสุข #easyandperfect #ลําโพง #ลําโพงบลููธูทเสียงดี #ลําโพงบลทูธไร้สาย #ลําโพงปรับเบสได้"),
        music: EP_MUSIC,
    },
    Video {
        title: "แนวประกอบดนตรี",
        url: "https://www.tiktok.com/@easyandperfectaudio/video/7466300077095587079",
        channel: "E&P AUDIO",
        caption: Some("กงยูหรือจะสู้กงเพชร🫦💎 อยากเท่บ้าง‼️ แต่เรามันก็คนตลกซะด้วย 🕺"),
        hashtags: Some("#easyandperfectใช้ดีมีความสุข #easyandperfect #mrlover #squidgame #gongyoo"),
        music: EP_MUSIC,
    },
    Video {
        title: "แนวสัมภาษณ์",
        url: "https://www.tiktok.com/@easyandperfectaudio/video/7449597960079396104",
        channel: "E&P AUDIO",
        caption: Some("แสนฟอลแตกแล้ว ✅ ขอขอบพระคุณลูกค้า 😭 Easy and Perfect และ แฟนคลับช่อง E&P Audio ทุกท่าน 🙏🏻✨ ขอฝากตัวทั้งในปีนี้และปีต่อ ๆ ไป ด้วยนะคะ รักชาวอีซี่ค่ะ🔥💕"),
        hashtags: Some("#easyandperfectใช้ดีมีความสุข #easyandperfect #ลําโพง #qna #ถามตอบ #ขอบคุณทุกกําลังใจ❤️ขอบคุณทุกคอมเม้น🙏"),
        music: EP_MUSIC,
    },
    Video {
        title: "แนวปั่นๆ",
        url: "https://www.tiktok.com/@easyandperfectaudio/video/7467812794117672210",
        channel: "E&P AUDIO",
        caption: Some("อยากให้ตัดต่อปรับอะไร ? Ep.2 🔥 พาพี่เพชรมาทำความฝันให้เป็นจริงกันเถอะ🤩‼️"),
        hashtags: Some("#easyandperfectใช้ดีมีความสุข #easyandperfect #ตัดต่อ #ตลก #edit"),
        music: EP_MUSIC,
    },
    Video {
        title: "วิธีการเคลมสินค้า",
        url: "https://www.tiktok.com/@easyandperfectaudio/video/7403200005940563208",
        channel: "E&P AUDIO",
        caption: Some("วิธีการติดต่อแอดมินและเคลมสินค้าในกรณีสินค้ามีปัญหาทำยังไงนะ🤔?"),
        hashtags: Some("#easyandperfect #easyandperfectใช้ดีมีความสุข #lonzuer #fyp #howto"),
        music: EP_MUSIC,
    },
    Video {
        title: "แนวละคร",
        url: "https://www.tiktok.com/@easyandperfectaudio/video/7346047066826689793",
        channel: "E&P AUDIO",
        caption: Some("ได้มั้ยคะสุดสวย 💕✨"),
        hashtags: Some("#easyandperfect #easyandperfectใช้ดีมีความสุข #fypシ #เทรนด์วันนี้"),
        music: EP_MUSIC,
    },
    Video {
        title: "แนวtext",
        url: "https://www.tiktok.com/@easyandperfectaudio/video/7408870238961274120",
        channel: "E&P AUDIO",
        caption: Some("วิธีขอเมียซื้อของ ฉบับพ่อบ้านใจกล้า 🥰🔥💦"),
        hashtags: Some("#pov #easyandperfectใช้ดีมีความสุข #ลําโพงบลูทูธ #พ่อบ้านใจกล้า #ตลก #chat"),
        music: EP_MUSIC,
    },
    Video {
        title: "ถ่ายและตัดต่อ",
        url: "https://www.tiktok.com/@easyandperfect.official/video/7352037945978670353",
        channel: "Easy and Perfect Official",
        caption: Some("ถ่ายและตัดต่อ"),
        hashtags: Some("#easyandperfect #easyandperfectใช้ดีมีความสุข"),
        music: Some("เสียงต้นฉบับ - Easy and Perfect Official"),
    },
];
