/// Client script: posts each control change to `/edit`, the button to
/// `/generate`, and redraws from the returned snapshot.
pub(super) fn build_inline_js(initial_snapshot_json: &str) -> String {
    format!(
        r#"<script>
(function() {{
  var errorEl = document.getElementById('error');
  var outputPanel = document.getElementById('output-panel');
  var outputEl = document.getElementById('output');
  var previewEl = document.getElementById('preview');
  var copyBtn = document.getElementById('copy-btn');

  function render(snap) {{
    errorEl.textContent = snap.error || '';
    if (snap.output) {{
      outputEl.value = snap.output;
      outputPanel.hidden = false;
    }} else {{
      outputEl.value = '';
      outputPanel.hidden = true;
    }}
    previewEl.innerHTML = snap.preview.html;
    document.querySelectorAll('[data-group]').forEach(function(el) {{
      el.hidden = !snap.visible[el.dataset.group];
    }});
    // Derived fields (solid color reset) may have changed server-side.
    var solid = document.querySelector('[data-field="solidColor"]');
    if (solid && solid.value !== snap.config.solidColor) solid.value = snap.config.solidColor;
  }}

  function post(url, body) {{
    return fetch(url, {{
      method: 'POST',
      headers: {{ 'Content-Type': 'application/json' }},
      body: body === undefined ? undefined : JSON.stringify(body)
    }}).then(function(r) {{ return r.json(); }}).then(function(snap) {{
      if (snap.config) render(snap);
      else if (snap.error) errorEl.textContent = snap.error;
    }});
  }}

  function editFor(el) {{
    var field = el.dataset.field;
    if (field === 'gradientColor') {{
      return {{ field: field, value: {{ index: Number(el.dataset.index), color: el.value }} }};
    }}
    if (el.type === 'checkbox') return {{ field: field, value: el.checked }};
    return {{ field: field, value: el.value }};
  }}

  document.querySelectorAll('[data-field]').forEach(function(el) {{
    var evt = (el.tagName === 'SELECT' || el.type === 'checkbox') ? 'change' : 'input';
    el.addEventListener(evt, function() {{ post('/edit', editFor(el)); }});
  }});

  document.getElementById('generate-btn').addEventListener('click', function() {{
    post('/generate');
  }});

  copyBtn.addEventListener('click', function() {{
    if (!navigator.clipboard) return;
    navigator.clipboard.writeText(outputEl.value).then(function() {{
      copyBtn.classList.add('copied');
      copyBtn.textContent = 'Copied';
      setTimeout(function() {{
        copyBtn.classList.remove('copied');
        copyBtn.textContent = 'Copy';
      }}, 1200);
    }});
  }});

  render({initial_snapshot_json});
}})();
</script>"#
    )
}
