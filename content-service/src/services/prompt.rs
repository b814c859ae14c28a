//! Instruction text sent to the model for each article.

/// Build the article prompt for `country` with emphasis on `topic`.
///
/// The template fixes the persona, restricts the domain (the model is told to
/// send the reader away when the input is not a country or the topic is
/// sexual, hateful, discriminatory or off-topic) and pins the output to a bare
/// UTF-8 HTML fragment: `<h1>` title, `<h2>` subtitles, `<p>` body, with no
/// document scaffolding and no markdown fence. Both values are interpolated
/// as given.
pub fn build_prompt(country: &str, topic: &str) -> String {
    format!(
        "Você é especialista em cultura de países, geografia e história, você será como um professor, sua personalidade será gentil e tranquilo, mas sempre vá direto ao ponto.
    Gere um texto especifico sobre o {country} com enfase no {topic}. Caso não seja país ou o assunto seja de cunho sexual, odio, preconceito ou não relacionado ao suas especialidades, devolva para a pessoa voltar mais tarde com uma perguta sobre um país.
    A resposta será em formato HTML com formatação UTF 8, mas sem seção <head>, tags <body> e </body>, sem <!DOCTYPE>, sem o idioma, sem a tag da formatação. Não utilize blocos de código, markdown, nem formatação como ```html, mande apenas o conteudo, apenas o título em <h1>, os subtitulos em <h2> e o conteudo em <p>.
    "
    )
}
