use super::repo::User;

/// Escape text for interpolation into HTML element content or a quoted
/// attribute value.
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_card(user: &User) -> String {
    let name = escape_html(&user.name);
    let email = escape_html(&user.email);
    let photo = escape_html(&user.photo);
    format!(
        r#"<div class="card">
  <img src="/uploads/{photo}" alt="{name}">
  <h4>{name}</h4>
  <p>{email}</p>
</div>
"#
    )
}

/// The whole page: signup form on the left, one card per user on the right.
/// Pure function of the user list, so repeated renders of the same rows are
/// byte-identical.
pub fn render_page(users: &[User]) -> String {
    let cards: String = users.iter().map(render_card).collect();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Sign Up Page</title>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{
    font-family: 'Poppins', sans-serif;
    background: linear-gradient(135deg, #f7f7f7, #f1ede9);
    color: #2f2f2f;
    display: flex;
    height: 100vh;
    overflow: hidden;
  }}
  .container {{ display: flex; width: 100%; height: 100vh; }}
  .form-section {{
    width: 35%;
    background: #ffffff;
    box-shadow: 4px 0 10px rgba(0, 0, 0, 0.05);
    padding: 50px;
    display: flex;
    flex-direction: column;
    justify-content: center;
    position: fixed;
    top: 0; left: 0; bottom: 0;
  }}
  h2 {{ text-align: center; margin-bottom: 25px; color: #6e5e8e; font-size: 24px; }}
  form {{ display: flex; flex-direction: column; gap: 14px; }}
  input {{
    padding: 12px;
    border-radius: 10px;
    border: 1px solid #d9d4cf;
    background-color: #fafafa;
    font-size: 14px;
  }}
  button {{
    background: linear-gradient(135deg, #a596c9, #d7c9b5);
    color: white;
    border: none;
    padding: 12px;
    border-radius: 10px;
    cursor: pointer;
    font-size: 15px;
  }}
  .users-section {{
    margin-left: 35%;
    width: 65%;
    padding: 40px 50px;
    overflow-y: auto;
    height: 100vh;
  }}
  .user-grid {{
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(230px, 1fr));
    gap: 25px;
  }}
  .card {{
    background: #ffffff;
    border-radius: 16px;
    box-shadow: 0 3px 10px rgba(0, 0, 0, 0.08);
    padding: 20px;
    text-align: center;
  }}
  img {{
    border-radius: 50%;
    margin-top: 10px;
    width: 100px;
    height: 100px;
    object-fit: cover;
    border: 3px solid #cfc7df;
  }}
  h4 {{ margin-top: 12px; font-size: 16px; color: #403b3b; }}
  p {{ font-size: 14px; color: #7a7474; }}
</style>
</head>
<body>
<div class="container">
  <div class="form-section">
    <h2>Sign Up</h2>
    <form action="/submit" method="post" enctype="multipart/form-data">
      <input type="text" name="name" placeholder="Full name" required>
      <input type="email" name="email" placeholder="Email" required>
      <input type="file" name="photo" accept="image/*" required>
      <button type="submit">Register</button>
    </form>
  </div>
  <div class="users-section">
    <h2>Registered Users</h2>
    <div class="user-grid">
{cards}    </div>
  </div>
</div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32, name: &str, email: &str, photo: &str) -> User {
        User {
            id,
            name: name.into(),
            email: email.into(),
            photo: photo.into(),
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn card_contains_name_email_and_photo_path() {
        let page = render_page(&[user(1, "Ada", "ada@example.com", "123-portrait.png")]);
        assert!(page.contains("<h4>Ada</h4>"));
        assert!(page.contains("<p>ada@example.com</p>"));
        assert!(page.contains(r#"src="/uploads/123-portrait.png""#));
    }

    #[test]
    fn user_text_is_escaped_in_cards() {
        let page = render_page(&[user(1, "<b>Bob</b>", "a@b.c\"><script>", "p.png")]);
        assert!(!page.contains("<b>Bob</b>"));
        assert!(page.contains("&lt;b&gt;Bob&lt;/b&gt;"));
        assert!(!page.contains(r#"a@b.c"><script>"#));
    }

    #[test]
    fn users_render_in_given_order() {
        // Callers pass rows already sorted newest first.
        let page = render_page(&[
            user(2, "Second", "b@example.com", "2.png"),
            user(1, "First", "a@example.com", "1.png"),
        ]);
        let second = page.find("<h4>Second</h4>").expect("second card");
        let first = page.find("<h4>First</h4>").expect("first card");
        assert!(second < first);
    }

    #[test]
    fn rendering_is_idempotent() {
        let users = vec![user(1, "Ada", "ada@example.com", "1-p.png")];
        assert_eq!(render_page(&users), render_page(&users));
    }

    #[test]
    fn empty_list_still_renders_form() {
        let page = render_page(&[]);
        assert!(page.contains(r#"<form action="/submit" method="post" enctype="multipart/form-data">"#));
        assert!(page.contains(r#"accept="image/*""#));
        assert!(!page.contains("<h4>"));
    }
}
