// src/emails.rs
//! HTML bodies for customer, subscriber, applicant and admin emails.
//! Every submitted value is HTML-escaped before it is interpolated.

use chrono::{DateTime, Utc};
use html_escape::encode_text;

use crate::core::mailer::{Attachment, Email};
use crate::types::{ApplicationRecord, Subscriber, WholesaleInquiry};
use crate::utils::{bangkok_local, thai_date, thai_datetime};

const STYLE: &str = "body { font-family: 'Sarabun', Arial, sans-serif; line-height: 1.6; color: #333; }
.container { max-width: 600px; margin: 0 auto; padding: 20px; }
.header { background: #4A7C4E; color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }
.content { background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; }
.info-box { background: white; padding: 15px; margin: 15px 0; border-left: 4px solid #4A7C4E; border-radius: 5px; }
.button { display: inline-block; background: #4A7C4E; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px; margin: 20px 0; }
.footer { text-align: center; margin-top: 20px; color: #666; font-size: 12px; }
table { width: 100%; border-collapse: collapse; }
table td { padding: 8px; border-bottom: 1px solid #ddd; }";

const SHOP_LINKS: &str = r#"<h4>🛒 ช่องทางการซื้อทางออนไลน์</h4>
<p><a href="https://www.tiktok.com/@i_clean.organic">🎵 TikTok: I-Clean</a><br>
<a href="https://shopee.co.th/i_clean">🛒 Shopee: I-Clean</a><br>
<a href="https://www.lazada.co.th/shop/c-iclean">🛒 Lazada: I-Clean</a></p>"#;

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<style>\n{}\n</style>\n</head>\n<body>\n<div class=\"container\">\n{}\n<div class=\"footer\"><p>© i-Clean - Organic Products<br>Made with 💚 in Thailand</p></div>\n</div>\n</body>\n</html>\n",
        STYLE, body
    )
}

fn html(email: Email) -> Email {
    Email {
        html: page(&email.html),
        ..email
    }
}

fn esc(value: &str) -> String {
    encode_text(value).into_owned()
}

pub fn wholesale_confirmation(inquiry: &WholesaleInquiry, site_url: &str) -> Email {
    let message_row = inquiry
        .message
        .as_deref()
        .map(|m| format!("<li><strong>ข้อความ:</strong> {}</li>", esc(m)))
        .unwrap_or_default();

    html(Email {
        to: inquiry.email.clone(),
        subject: "🎉 ยินดีต้อนรับสู่ i-Clean - ได้รับข้อมูลของคุณแล้ว".to_string(),
        html: format!(
            r#"<div class="header"><h1>🌿 i-Clean</h1><h2>ขอบคุณที่สนใจร่วมเป็นตัวแทนจำหน่าย!</h2></div>
<div class="content">
<p>สวัสดีคุณ {name},</p>
<p>เราได้รับข้อมูลของคุณเรียบร้อยแล้ว! ทีมงาน i-Clean จะติดต่อกลับภายใน 24 ชั่วโมง เพื่อส่งเอกสารราคาส่งและแผนการตลาด</p>
<h3>📋 ข้อมูลที่ได้รับ:</h3>
<ul>
<li><strong>ชื่อ:</strong> {name}</li>
<li><strong>อีเมล:</strong> {email}</li>
<li><strong>โทรศัพท์:</strong> {phone}</li>
<li><strong>ประเภทธุรกิจ:</strong> {business}</li>
{message_row}
</ul>
<p>ในระหว่างนี้ คุณสามารถติดตามเพจ Facebook: I-Clean หรือสอบถามเพิ่มเติมทาง Line: @i_clean</p>
<center><a href="{site}" class="button">เยี่ยมชมเว็บไซต์</a>
{links}</center>
</div>"#,
            name = esc(&inquiry.fullname),
            email = esc(&inquiry.email),
            phone = esc(&inquiry.phone),
            business = esc(&inquiry.business_type),
            message_row = message_row,
            site = esc(site_url),
            links = SHOP_LINKS,
        ),
        attachments: vec![],
    })
}

pub fn wholesale_admin_alert(inquiry: &WholesaleInquiry, admin_email: &str) -> Email {
    html(Email {
        to: admin_email.to_string(),
        subject: format!("🆕 Wholesale Inquiry - {}", inquiry.fullname),
        html: format!(
            r#"<h2>🔔 Wholesale Inquiry ใหม่!</h2>
<p><strong>รหัส:</strong> {id}</p>
<p><strong>ชื่อ:</strong> {name}</p>
<p><strong>อีเมล:</strong> {email}</p>
<p><strong>โทรศัพท์:</strong> {phone}</p>
<p><strong>ประเภทธุรกิจ:</strong> {business}</p>
<p><strong>ข้อความ:</strong> {message}</p>
<p><strong>วันที่:</strong> {date}</p>
<hr>
<p><em>กรุณาติดต่อกลับภายใน 24 ชั่วโมง</em></p>"#,
            id = esc(&inquiry.id),
            name = esc(&inquiry.fullname),
            email = esc(&inquiry.email),
            phone = esc(&inquiry.phone),
            business = esc(&inquiry.business_type),
            message = esc(inquiry.message.as_deref().unwrap_or("-")),
            date = thai_datetime(inquiry.submitted_at),
        ),
        attachments: vec![],
    })
}

pub fn newsletter_welcome(subscriber: &Subscriber) -> Email {
    html(Email {
        to: subscriber.email.clone(),
        subject: "🎉 ยินดีต้อนรับสู่ i-Clean".to_string(),
        html: format!(
            r#"<div class="header"><h1>🌿 i-Clean</h1><h2>ยินดีต้อนรับสู่ครอบครัว i-Clean!</h2></div>
<div class="content">
<p>สวัสดีค่ะ,</p>
<p>ขอบคุณที่สมัครรับข่าวสารจาก i-Clean 💚</p>
<p>คุณจะได้รับ:</p>
<ul>
<li>🎁 โปรโมชั่นและส่วนลดพิเศษ</li>
<li>📰 ข่าวสารผลิตภัณฑ์ใหม่</li>
<li>💡 เคล็ดลับการล้างจานและรักษาสิ่งแวดล้อม</li>
<li>🌱 ความรู้เกี่ยวกับ Organic Living</li>
</ul>
<center>{links}</center>
</div>"#,
            links = SHOP_LINKS,
        ),
        attachments: vec![],
    })
}

pub fn application_confirmation(record: &ApplicationRecord, at: DateTime<Utc>) -> Email {
    let id = esc(&record.id);
    html(Email {
        to: record.personal_info.email.clone(),
        subject: "🎉 ยืนยันการรับใบสมัครงาน".to_string(),
        html: format!(
            r#"<div class="header"><h1>🌿 i-Clean</h1><h2>ขอบคุณที่สมัครงานกับเรา!</h2></div>
<div class="content">
<p>สวัสดีคุณ <strong>{name}</strong>,</p>
<p>เราได้รับใบสมัครงานของคุณเรียบร้อยแล้ว และกำลังพิจารณาข้อมูลของคุณอย่างละเอียด 📋</p>
<div class="info-box">
<h3>📋 ข้อมูลการสมัคร</h3>
<p><strong>รหัสใบสมัคร:</strong> {id}</p>
<p><strong>ตำแหน่งที่สมัคร:</strong> {position}</p>
<p><strong>วันที่สมัคร:</strong> {date}</p>
</div>
<h3>📞 ขั้นตอนถัดไป:</h3>
<ol>
<li>ทีมงาน HR จะพิจารณาใบสมัครของคุณ (3-5 วันทำการ)</li>
<li>หากผ่านการพิจารณา เราจะติดต่อกลับเพื่อนัดสัมภาษณ์</li>
<li>กรุณาตรวจสอบอีเมลและโทรศัพท์เป็นประจำ</li>
</ol>
<p><strong>หมายเหตุ:</strong> กรุณาเก็บรหัสใบสมัคร ({id}) ไว้สำหรับการติดตามผล</p>
</div>"#,
            name = esc(&record.personal_info.fullname_th),
            id = id,
            position = esc(&record.position),
            date = thai_date(bangkok_local(at).date()),
        ),
        attachments: vec![],
    })
}

/// Admin alert carrying the rendered PDF first, then the resume if one was uploaded.
pub fn application_admin_alert(
    record: &ApplicationRecord,
    admin_email: &str,
    pdf: Vec<u8>,
    resume: Option<Attachment>,
    at: DateTime<Utc>,
) -> Email {
    let info = &record.personal_info;
    let pdf_name = record.pdf_filename();
    let salary = record
        .additional_info
        .expected_salary
        .as_deref()
        .map(|s| format!("{} บาท", esc(s)))
        .unwrap_or_else(|| "ไม่ระบุ".to_string());
    let resume_row = match &resume {
        Some(file) => format!("<li>✅ เรซูเม่ - <strong>{}</strong></li>", esc(&file.filename)),
        None => "<li>❌ ไม่มีไฟล์เรซูเม่แนบมา</li>".to_string(),
    };

    let mut attachments = vec![Attachment::pdf(pdf_name.clone(), pdf)];
    attachments.extend(resume);

    html(Email {
        to: admin_email.to_string(),
        subject: format!("🆕 ใบสมัครงานใหม่ - {} - {}", record.position, info.fullname_th),
        html: format!(
            r#"<div class="header"><h1>🆕 มีใบสมัครงานใหม่!</h1><p>รหัสใบสมัคร: {id}</p></div>
<div class="content">
<div class="info-box"><strong>⚠️ แจ้งเตือน:</strong> มีผู้สมัครงานตำแหน่ง <strong>{position}</strong> กรุณาตรวจสอบไฟล์ PDF ที่แนบมาพร้อมอีเมลนี้</div>
<h2>📋 สรุปข้อมูลผู้สมัคร</h2>
<table>
<tr><td>ชื่อ-นามสกุล:</td><td>{name}</td></tr>
<tr><td>ตำแหน่งที่สมัคร:</td><td>{position}</td></tr>
<tr><td>เบอร์โทร:</td><td>{phone}</td></tr>
<tr><td>LINE ID:</td><td>{line_id}</td></tr>
<tr><td>อีเมล:</td><td>{email}</td></tr>
<tr><td>อายุ:</td><td>{age} ปี</td></tr>
<tr><td>เงินเดือนที่คาดหวัง:</td><td>{salary}</td></tr>
</table>
<h3>📎 ไฟล์ที่แนบมา:</h3>
<ul>
<li>✅ ใบสมัครงาน (PDF) - <strong>{pdf_name}</strong></li>
{resume_row}
</ul>
<h3>⏰ ข้อมูลการส่ง:</h3>
<p><strong>วันที่:</strong> {date}</p>
<p><strong>สถานะ:</strong> ⏳ รอการพิจารณา</p>
<hr>
<p><strong>📌 Action Required:</strong> กรุณาดาวน์โหลดและตรวจสอบไฟล์ PDF ที่แนบมา และติดต่อผู้สมัครภายใน 7 วันทำการ</p>
</div>"#,
            id = esc(&record.id),
            position = esc(&record.position),
            name = esc(&info.fullname_th),
            phone = esc(&info.phone),
            line_id = esc(&info.line_id),
            email = esc(&info.email),
            age = esc(&info.age),
            salary = salary,
            pdf_name = esc(&pdf_name),
            resume_row = resume_row,
            date = thai_datetime(at),
        ),
        attachments,
    })
}
